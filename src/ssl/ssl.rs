use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::process::exit;
use log::{error, info};
use rcgen::{generate_simple_self_signed, CertifiedKey};

/// Builds a rustls server config from PEM cert/key files. Bad or missing
/// material is fatal at boot, like any other unusable listener config.
pub fn load_rustls_config(cert_path: &str, key_path: &str) -> rustls::ServerConfig {
    if cert_path.is_empty() || key_path.is_empty() {
        error!("[SSL] No SSL key or SSL certificate given, exiting...");
        exit(1);
    }
    let certs_file = &mut BufReader::new(match File::open(cert_path) {
        Ok(data) => data,
        Err(e) => panic!("[SSL] SSL cert unreadable: {}", e),
    });
    let key_file = &mut BufReader::new(match File::open(key_path) {
        Ok(data) => data,
        Err(e) => panic!("[SSL] SSL key unreadable: {}", e),
    });
    let tls_certs = match rustls_pemfile::certs(certs_file).collect::<Result<Vec<_>, _>>() {
        Ok(data) => data,
        Err(e) => panic!("[SSL] SSL cert couldn't be extracted: {}", e),
    };
    let tls_key = match rustls_pemfile::pkcs8_private_keys(key_file).next() {
        Some(Ok(data)) => data,
        Some(Err(e)) => panic!("[SSL] SSL key couldn't be extracted: {}", e),
        None => panic!("[SSL] SSL key file contains no PKCS#8 key"),
    };
    match rustls::ServerConfig::builder()
        .with_no_client_auth()
        .with_single_cert(tls_certs, rustls::pki_types::PrivateKeyDer::Pkcs8(tls_key))
    {
        Ok(data) => data,
        Err(e) => panic!("[SSL] SSL config couldn't be created: {}", e),
    }
}

/// Writes a self-signed key/cert pair for development use, then exits.
pub fn cert_gen(domain: &str, key_path: &str, cert_path: &str) -> ! {
    info!("[CERTGEN] Requesting to generate a self-signed key and certificate file");

    let mut subject_alt_names = vec![String::from("localhost")];
    if domain != "localhost" {
        subject_alt_names.push(domain.to_string());
    }

    let CertifiedKey { cert, signing_key } = generate_simple_self_signed(subject_alt_names).unwrap();

    match fs::write(key_path, signing_key.serialize_pem()) {
        Ok(_) => {
            info!("[CERTGEN] The key file {} has been generated", key_path);
        }
        Err(error) => {
            error!("[CERTGEN] The key file {} could not be generated!", key_path);
            panic!("[CERTGEN] {}", error)
        }
    }
    match fs::write(cert_path, cert.pem()) {
        Ok(_) => {
            info!("[CERTGEN] The cert file {} has been generated", cert_path);
        }
        Err(error) => {
            error!("[CERTGEN] The cert file {} could not be generated!", cert_path);
            panic!("[CERTGEN] {}", error)
        }
    }

    info!("[CERTGEN] The files {} and {} have been generated, use them only for development reasons", key_path, cert_path);
    exit(0)
}
