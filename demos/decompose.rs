use sipuri::SipUri;
use std::error::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const SAMPLES: &[&str] = &[
    "sip:user:password@host:port;uri-parameters?headers",
    "sip:alice@atlanta.com",
    "sips:alice@atlanta.com?subject=project%20x&priority=urgent",
    "sip:alice;day=tuesday@atlanta.com",
    "sip:p2.domain.com;lr",
];

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sipuri=trace,decompose=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let inputs: Vec<&str> = if args.is_empty() {
        SAMPLES.to_vec()
    } else {
        args.iter().map(String::as_str).collect()
    };

    for input in inputs {
        let uri = match SipUri::parse(input) {
            Ok(uri) => uri,
            Err(err) => {
                error!("{input}: {err}");
                continue;
            }
        };
        info!(
            scheme = %uri.scheme,
            host = %uri.host,
            parameters = %uri.parameters,
            headers = %uri.headers,
            "{input}"
        );

        let mut out = Vec::with_capacity(uri.encoded_len());
        match uri.write_to(&mut out) {
            Ok(()) => info!("serialized: {}", String::from_utf8_lossy(&out)),
            Err(err) => error!("{input}: {err}"),
        }
    }

    Ok(())
}
