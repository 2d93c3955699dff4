use clap::{App, AppSettings, Arg};
use std::ffi::OsString;

/// Printed, on stdout, whenever the positional argument count is wrong.
pub const USAGE_MESSAGE: &str = "Incorrect, include dst ip and iface";

const TARGET: &str = "DST_IP";
const IFACE: &str = "IFACE";

/// What the command line asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Wrong number of arguments. Nothing is sent.
    Usage,
    Send(Invocation),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    /// Destination as typed: dotted-decimal IPv4, or a host name.
    pub target: String,
    /// Interface name, passed to the OS untouched.
    pub iface: String,
}

pub fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("arpsend")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Broadcast a single ARP who-has request on a network interface")
        .setting(AppSettings::StrictUtf8)
        .setting(AppSettings::DontDelimitTrailingValues)
        .arg(
            Arg::with_name(TARGET)
                .index(1)
                .required(true)
                .help("Destination IPv4 address"),
        )
        .arg(
            Arg::with_name(IFACE)
                .index(2)
                .required(true)
                .help("Interface to send on"),
        )
}

/// Parses a full argument vector, program name first.
///
/// Anything other than exactly two arguments after the program name is `Command::Usage`, whatever
/// they look like: `--`, `-h` and `--version` are counted, not interpreted. Two arguments are
/// always taken as the destination and the interface. The only `Err` is an argument that is not
/// valid UTF-8.
pub fn parse_from<I, T>(args: I) -> Result<Command, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.len() != 3 {
        return Ok(Command::Usage);
    }

    // Everything after a leading `--` is positional to clap, including another `--`.
    args.insert(1, OsString::from("--"));
    let matches = app().get_matches_from_safe(args)?;

    Ok(Command::Send(Invocation {
        target: matches.value_of(TARGET).unwrap_or_default().to_string(),
        iface: matches.value_of(IFACE).unwrap_or_default().to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn send(target: &str, iface: &str) -> Command {
        Command::Send(Invocation {
            target: target.to_string(),
            iface: iface.to_string(),
        })
    }

    #[test]
    fn two_positionals() {
        assert_eq!(
            parse_from(vec!["arpsend", "192.168.1.1", "eth0"]).unwrap(),
            send("192.168.1.1", "eth0")
        );
    }

    #[test]
    fn wrong_count_is_usage() {
        let invocations: Vec<Vec<&str>> = vec![
            vec![],
            vec!["arpsend"],
            vec!["arpsend", "10.0.0.5"],
            vec!["arpsend", "10.0.0.5", "wlan0", "extra"],
            vec!["arpsend", "--", "10.0.0.5", "eth0"],
            vec!["arpsend", "10.0.0.5", "wlan0", "--extra"],
            vec!["arpsend", "-x"],
            vec!["arpsend", "-h"],
            vec!["arpsend", "--help"],
            vec!["arpsend", "-V"],
            vec!["arpsend", "--version"],
            vec!["arpsend", "--"],
        ];
        for args in invocations {
            assert_eq!(parse_from(args.clone()).unwrap(), Command::Usage, "{:?}", args);
        }
    }

    #[test]
    fn dashed_arguments_are_positional() {
        assert_eq!(parse_from(vec!["arpsend", "-h", "eth0"]).unwrap(), send("-h", "eth0"));
        assert_eq!(
            parse_from(vec!["arpsend", "10.0.0.5", "--version"]).unwrap(),
            send("10.0.0.5", "--version")
        );
        assert_eq!(parse_from(vec!["arpsend", "--", "eth0"]).unwrap(), send("--", "eth0"));
        assert_eq!(parse_from(vec!["arpsend", "10.0.0.5", "--"]).unwrap(), send("10.0.0.5", "--"));
    }

    #[test]
    fn arguments_are_not_transformed() {
        assert_eq!(
            parse_from(vec!["arpsend", "not.an.ip", "enp0s31f6.100"]).unwrap(),
            send("not.an.ip", "enp0s31f6.100")
        );
        assert_eq!(
            parse_from(vec!["arpsend", "10.0.0.5,10.0.0.6", ""]).unwrap(),
            send("10.0.0.5,10.0.0.6", "")
        );
    }

    #[cfg(unix)]
    #[test]
    fn invalid_utf8_is_an_error() {
        use std::os::unix::ffi::OsStringExt;

        let iface = OsString::from_vec(vec![b'e', b't', 0xff]);
        let args = vec![OsString::from("arpsend"), OsString::from("10.0.0.5"), iface];
        let err = parse_from(args).unwrap_err();
        assert_eq!(err.kind, clap::ErrorKind::InvalidUtf8);
    }
}
