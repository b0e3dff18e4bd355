//! Identité réseau de la session.

use anyhow::Result;
use tracing::info;
use uuid::Uuid;
use vdconfig::Config;

/// Identité du renderer annoncée sur le réseau.
///
/// Immuable après construction : l'ip, le port et le nom viennent de la
/// configuration (avec repli sur les valeurs de la plateforme), l'UDN est
/// dérivé de façon déterministe de l'identifiant client persistant.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionIdentity {
    pub ip: String,
    pub port: u16,
    pub udn: String,
    pub friendly_name: String,
}

impl SessionIdentity {
    /// Résout l'identité effective depuis la configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let ip = config.get_dlna_ip();
        info!("DLNA IP: {}", ip);

        let port = config.get_dlna_port();
        info!("DLNA Port: {}", port);

        let udn = format!("uuid:{}", derive_udn(&config.get_client_id()?));
        info!("DLNA UUID: {}", udn);

        let friendly_name = config.get_dlna_name();

        Ok(Self {
            ip,
            port,
            udn,
            friendly_name,
        })
    }

    /// Adresse de découverte affichée à l'utilisateur.
    pub fn endpoint(&self) -> String {
        format!("http://{}:{}", self.ip, self.port)
    }
}

/// Dérive l'UDN du device depuis l'identifiant client persistant.
///
/// UUID v5 : un même client annonce toujours le même device, ce qui évite aux
/// points de contrôle de voir un renderer « neuf » à chaque lancement.
fn derive_udn(client_id: &str) -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_OID, client_id.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn udn_derivation_is_deterministic() {
        let a = derive_udn("client-1");
        let b = derive_udn("client-1");
        let c = derive_udn("client-2");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn endpoint_is_http_host_port() {
        let identity = SessionIdentity {
            ip: "192.168.1.42".into(),
            port: 9958,
            udn: "uuid:0".into(),
            friendly_name: "VidDeck".into(),
        };
        assert_eq!(identity.endpoint(), "http://192.168.1.42:9958");
    }
}
