#[cfg(target_os = "linux")]
use arpsend::{cli, Outcome};
#[cfg(target_os = "linux")]
use log::debug;
#[cfg(target_os = "linux")]
use std::{env, ffi::OsString};

#[cfg(target_os = "linux")]
fn main() -> Result<(), failure::Error> {
    env_logger::init();

    let args: Vec<OsString> = env::args_os().collect();
    debug!("arguments: {:?}", args);

    let command = cli::parse_from(&args).unwrap_or_else(|e| e.exit());
    match arpsend::run(command, arpsend::PacketInterface::open)? {
        // A wrong argument count keeps the exit status at 0.
        Outcome::Usage => println!("{}", arpsend::USAGE_MESSAGE),
        Outcome::Sent { bytes } => debug!("done, {} bytes on the wire", bytes),
    }
    Ok(())
}

#[cfg(not(target_os = "linux"))]
fn main() {
    eprintln!("arpsend needs AF_PACKET sockets and only works on Linux");
    std::process::exit(1);
}
