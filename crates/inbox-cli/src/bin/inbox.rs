use inbox_cli::{run_cli, MemoryInboxBackend};

fn main() {
    inbox_cli::set_version(env!("CARGO_PKG_VERSION"));
    let args: Vec<String> = std::env::args().skip(1).collect();
    let backend = MemoryInboxBackend::seeded();
    let out = run_cli(&args, &backend);
    print!("{}", out.stdout);
    eprint!("{}", out.stderr);
    std::process::exit(out.exit_code);
}
