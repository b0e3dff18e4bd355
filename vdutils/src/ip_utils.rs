use get_if_addrs::get_if_addrs;
use std::collections::HashMap;
use std::net::UdpSocket;

/// Devine l'adresse IP locale de la machine.
///
/// Cette fonction tente de déterminer l'adresse IP locale en créant une
/// connexion UDP vers un serveur DNS public (8.8.8.8). Cette technique permet
/// d'identifier l'interface réseau qui serait utilisée pour communiquer avec
/// Internet.
///
/// # Fonctionnement
///
/// 1. Crée un socket UDP lié à `0.0.0.0:0`
/// 2. Tente une connexion (non effective pour UDP) vers `8.8.8.8:80`
/// 3. Récupère l'adresse IP locale du socket
/// 4. En cas d'échec à n'importe quelle étape, retourne `127.0.0.1`
///
/// # Note
///
/// Cette méthode ne crée pas de véritable connexion réseau (UDP est sans
/// connexion), elle demande simplement au système d'exploitation quelle
/// interface serait utilisée pour joindre l'adresse cible.
pub fn guess_local_ip() -> String {
    match UdpSocket::bind("0.0.0.0:0") {
        Ok(socket) => {
            if socket.connect("8.8.8.8:80").is_ok() {
                if let Ok(local_addr) = socket.local_addr() {
                    return local_addr.ip().to_string();
                }
            }
            "127.0.0.1".to_string()
        }
        Err(_) => "127.0.0.1".to_string(),
    }
}

/// Liste toutes les adresses IPv4 non-loopback des interfaces réseau.
///
/// Retourne une `HashMap` nom d'interface → adresses IP. En cas d'erreur lors
/// de la récupération des interfaces, retourne une entrée `"error"` avec un
/// message d'erreur.
#[allow(dead_code)]
pub fn list_local_ips() -> HashMap<String, Vec<String>> {
    let mut result: HashMap<String, Vec<String>> = HashMap::new();

    match get_if_addrs() {
        Ok(interfaces) => {
            for iface in interfaces {
                if iface.is_loopback() {
                    continue;
                }
                if let get_if_addrs::IfAddr::V4(addr) = iface.addr {
                    result
                        .entry(iface.name.clone())
                        .or_default()
                        .push(addr.ip.to_string());
                }
            }
        }
        Err(e) => {
            result.insert("error".to_string(), vec![format!("{}", e)]);
        }
    }

    result
}
