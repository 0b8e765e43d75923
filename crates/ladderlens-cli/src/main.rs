use clap::Parser;
use ladderlens::{Cli, run};

fn main() {
    // Reset SIGPIPE to default behavior so piping into `head` or `less`
    // that exits early terminates us instead of panicking
    #[cfg(unix)]
    reset_sigpipe();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}
