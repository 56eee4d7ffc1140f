fn main() -> Result<(), graphical_interface::PickerError> {
    graphical_interface::run()
}
