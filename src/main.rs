fn main() {
    mc_init::app::cli::run();
}
