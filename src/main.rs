use ownchess::console::console_top::{run_stdio_loop, ConsoleOptions};

fn main() -> std::io::Result<()> {
    env_logger::init();

    let options = ConsoleOptions::from_args(std::env::args().skip(1));
    run_stdio_loop(options)
}
