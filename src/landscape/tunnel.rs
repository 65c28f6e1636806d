use std::fmt;

use super::error::LandscapeError;
use super::record::LandscapeRecord;

/// Internal service reachable through a landscape's jumpbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TunnelTarget {
    Director,
    Concourse,
}

impl TunnelTarget {
    /// Resolve a target name; an empty name selects the director
    pub fn parse(name: &str) -> Result<Self, LandscapeError> {
        match name {
            "" | "director" => Ok(TunnelTarget::Director),
            "concourse" => Ok(TunnelTarget::Concourse),
            other => Err(LandscapeError::UnknownTarget(other.to_string())),
        }
    }

    pub fn port(self) -> u16 {
        match self {
            TunnelTarget::Director => 25555,
            TunnelTarget::Concourse => 8080,
        }
    }

    /// Forward spec for this target inside `landscape`
    pub fn forward(self, landscape: &LandscapeRecord) -> PortForward {
        let remote_host = match self {
            TunnelTarget::Director => &landscape.director_ip,
            TunnelTarget::Concourse => &landscape.concourse_ip,
        };

        PortForward {
            local_port: self.port(),
            remote_host: remote_host.clone(),
            remote_port: self.port(),
        }
    }
}

/// A `localhost:<local>:<host>:<remote>` ssh local forward
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortForward {
    pub local_port: u16,
    pub remote_host: String,
    pub remote_port: u16,
}

impl fmt::Display for PortForward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "localhost:{}:{}:{}",
            self.local_port, self.remote_host, self.remote_port
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn landscape() -> LandscapeRecord {
        LandscapeRecord {
            jumpbox_ip: "1.1.1.1".to_string(),
            concourse_ip: "2.2.2.2".to_string(),
            director_ip: "3.3.3.3".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_target_is_director() {
        let landscape = landscape();
        for name in ["", "director"] {
            let target = TunnelTarget::parse(name).unwrap();
            assert_eq!(target, TunnelTarget::Director);
            assert_eq!(
                target.forward(&landscape).to_string(),
                "localhost:25555:3.3.3.3:25555"
            );
        }
    }

    #[test]
    fn test_concourse_target() {
        let forward = TunnelTarget::parse("concourse")
            .unwrap()
            .forward(&landscape());
        assert_eq!(forward.to_string(), "localhost:8080:2.2.2.2:8080");
    }

    #[test]
    fn test_unknown_targets_are_rejected() {
        for name in ["Director", "uaa", " concourse", "director "] {
            let err = TunnelTarget::parse(name).unwrap_err();
            assert!(matches!(err, LandscapeError::UnknownTarget(ref t) if t == name));
        }
    }
}
