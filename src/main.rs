use mailbox_chess::console::console_config::ConsoleConfig;
use mailbox_chess::console::console_loop::run_stdio_loop;

fn main() -> std::io::Result<()> {
    run_stdio_loop(ConsoleConfig::from_env())
}
