fn main() {
    setting_mixins::app::cli::run();
}
