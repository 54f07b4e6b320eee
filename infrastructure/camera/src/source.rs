use std::net::IpAddr;
use std::path::PathBuf;
use std::str::FromStr;

/// Where decoded payloads are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScannerSource {
    /// A character device or file, e.g. a USB scanner in serial mode.
    Device(PathBuf),
    /// A scanner bridge streaming one payload per line over TCP.
    Tcp { host: String, port: u16 },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceParseError {
    #[error("scanner.source_empty")]
    Empty,
    #[error("scanner.invalid_tcp_address")]
    InvalidTcpAddress(String),
}

impl ScannerSource {
    /// Loopback TCP hosts are always allowed; devices are local by definition.
    pub fn is_local(&self) -> bool {
        match self {
            ScannerSource::Device(_) => true,
            ScannerSource::Tcp { host, .. } => {
                host.eq_ignore_ascii_case("localhost")
                    || host.parse::<IpAddr>().is_ok_and(|ip| ip.is_loopback())
            }
        }
    }
}

impl FromStr for ScannerSource {
    type Err = SourceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if raw.is_empty() {
            return Err(SourceParseError::Empty);
        }

        if let Some(address) = raw.strip_prefix("tcp://") {
            let invalid = || SourceParseError::InvalidTcpAddress(address.to_string());
            let (host, port) = address.rsplit_once(':').ok_or_else(invalid)?;
            let host = host.trim_start_matches('[').trim_end_matches(']');
            let port = port.parse::<u16>().map_err(|_| invalid())?;
            if host.is_empty() {
                return Err(invalid());
            }
            return Ok(ScannerSource::Tcp {
                host: host.to_string(),
                port,
            });
        }

        let path = raw.strip_prefix("device:").unwrap_or(raw);
        if path.is_empty() {
            return Err(SourceParseError::Empty);
        }
        Ok(ScannerSource::Device(PathBuf::from(path)))
    }
}

impl std::fmt::Display for ScannerSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScannerSource::Device(path) => write!(f, "device:{}", path.display()),
            ScannerSource::Tcp { host, port } if host.contains(':') => {
                write!(f, "tcp://[{}]:{}", host, port)
            }
            ScannerSource::Tcp { host, port } => write!(f, "tcp://{}:{}", host, port),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_bare_path_as_device() {
        assert_eq!(
            "/dev/ttyACM0".parse::<ScannerSource>(),
            Ok(ScannerSource::Device(PathBuf::from("/dev/ttyACM0")))
        );
    }

    #[test]
    fn should_parse_prefixed_device() {
        assert_eq!(
            "device:/dev/hidraw1".parse::<ScannerSource>(),
            Ok(ScannerSource::Device(PathBuf::from("/dev/hidraw1")))
        );
    }

    #[test]
    fn should_parse_tcp_source() {
        assert_eq!(
            "tcp://127.0.0.1:7000".parse::<ScannerSource>(),
            Ok(ScannerSource::Tcp {
                host: "127.0.0.1".to_string(),
                port: 7000
            })
        );
        assert_eq!(
            "tcp://[::1]:7000".parse::<ScannerSource>(),
            Ok(ScannerSource::Tcp {
                host: "::1".to_string(),
                port: 7000
            })
        );
    }

    #[test]
    fn should_reject_tcp_source_without_port() {
        assert_eq!(
            "tcp://scanner.local".parse::<ScannerSource>(),
            Err(SourceParseError::InvalidTcpAddress(
                "scanner.local".to_string()
            ))
        );
    }

    #[test]
    fn should_reject_blank_source() {
        assert_eq!("  ".parse::<ScannerSource>(), Err(SourceParseError::Empty));
        assert_eq!("device:".parse::<ScannerSource>(), Err(SourceParseError::Empty));
    }

    #[test]
    fn should_treat_only_loopback_tcp_as_local() {
        let local: ScannerSource = "tcp://localhost:7000".parse().unwrap();
        let loopback: ScannerSource = "tcp://[::1]:7000".parse().unwrap();
        let remote: ScannerSource = "tcp://192.168.1.20:7000".parse().unwrap();

        assert!(local.is_local());
        assert!(loopback.is_local());
        assert!(!remote.is_local());
    }

    #[test]
    fn should_display_in_parseable_form() {
        let source: ScannerSource = "tcp://[::1]:7000".parse().unwrap();
        assert_eq!(source.to_string(), "tcp://[::1]:7000");
        assert_eq!(source.to_string().parse::<ScannerSource>(), Ok(source));
    }
}
