fn main() {
    gitsweep::app::startup::startup();
}
