mod coordinate_form;
pub use coordinate_form::WidgetCoordinateForm;
