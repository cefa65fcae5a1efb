//! Emulator container lifecycle.

use std::time::Duration;

use testcontainers::core::ContainerPort;
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, GenericImage, ImageExt};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::{debug, info};

use pgadapter_samples_core::error::SampleError;

use crate::config::{EmulatorConfig, PullPolicy};

const READINESS_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// `SSLRequest` startup packet: length 8, request code 80877103.
const SSL_REQUEST: [u8; 8] = [0, 0, 0, 8, 0x04, 0xd2, 0x16, 0x2f];

/// A running PGAdapter + Cloud Spanner emulator container.
///
/// The container is removed when the handle is dropped. Use `stop` for a
/// graceful shutdown that reports errors.
pub struct PgAdapterEmulator {
    container: ContainerAsync<GenericImage>,
    host: String,
    port: u16,
}

impl PgAdapterEmulator {
    /// Host the mapped port is reachable on.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Host port mapped to PGAdapter's container port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Container id.
    #[must_use]
    pub fn id(&self) -> &str {
        self.container.id()
    }

    /// Connection URL for `database` on this emulator. The emulator creates
    /// the database on first connect.
    #[must_use]
    pub fn connection_url(&self, database: &str) -> String {
        format!("postgres://{}:{}/{database}", self.host, self.port)
    }

    /// Stops and removes the container.
    ///
    /// # Errors
    ///
    /// Returns `SampleError::Container` if the container runtime fails to
    /// stop or remove the container.
    pub async fn stop(self) -> Result<(), SampleError> {
        info!(id = self.container.id(), "stopping PGAdapter and Spanner emulator");
        self.container.stop().await.map_err(SampleError::container)?;
        self.container.rm().await.map_err(SampleError::container)
    }
}

impl std::fmt::Debug for PgAdapterEmulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgAdapterEmulator")
            .field("id", &self.container.id())
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

/// Pulls and starts PGAdapter with the Cloud Spanner emulator.
///
/// Returns once PGAdapter answers a `PostgreSQL` handshake on the mapped
/// host port.
///
/// # Errors
///
/// Returns `SampleError::Container` if the image cannot be pulled, the
/// container fails to start, or PGAdapter does not answer within
/// `config.startup_timeout`.
pub async fn start_pg_adapter(config: &EmulatorConfig) -> Result<PgAdapterEmulator, SampleError> {
    let request = emulator_image(config).with_startup_timeout(config.startup_timeout);
    let request = match config.pull_policy {
        PullPolicy::Always => {
            info!(image = %config.image_reference(), "pulling PGAdapter and Spanner emulator");
            request.pull_image().await.map_err(SampleError::container)?
        }
        PullPolicy::IfMissing => request,
    };

    info!(image = %config.image_reference(), "starting PGAdapter and Spanner emulator");
    let container = request.start().await.map_err(SampleError::container)?;

    let host = container
        .get_host()
        .await
        .map_err(SampleError::container)?
        .to_string();
    let port = container
        .get_host_port_ipv4(ContainerPort::Tcp(config.container_port))
        .await
        .map_err(SampleError::container)?;

    wait_until_ready(&host, port, config.startup_timeout).await?;
    info!(id = container.id(), %host, port, "PGAdapter and Spanner emulator started");

    Ok(PgAdapterEmulator {
        container,
        host,
        port,
    })
}

fn emulator_image(config: &EmulatorConfig) -> GenericImage {
    GenericImage::new(config.image.as_str(), config.tag.as_str())
        .with_exposed_port(ContainerPort::Tcp(config.container_port))
}

/// Polls until the endpoint answers an `SSLRequest` with `S` or `N`.
///
/// The host port of a container accepts TCP connections as soon as the
/// container runs, so a plain connect does not show that PGAdapter listens.
async fn wait_until_ready(host: &str, port: u16, timeout: Duration) -> Result<(), SampleError> {
    let probe = async {
        loop {
            match answers_ssl_request(host, port).await {
                Ok(()) => return,
                Err(err) => {
                    debug!(%host, port, error = %err, "PGAdapter not ready yet");
                    tokio::time::sleep(READINESS_POLL_INTERVAL).await;
                }
            }
        }
    };
    tokio::time::timeout(timeout, probe).await.map_err(|_| {
        SampleError::container(format!(
            "PGAdapter on {host}:{port} did not answer within {timeout:?}"
        ))
    })
}

async fn answers_ssl_request(host: &str, port: u16) -> std::io::Result<()> {
    let mut stream = TcpStream::connect((host, port)).await?;
    stream.write_all(&SSL_REQUEST).await?;
    match stream.read_u8().await? {
        b'S' | b'N' => Ok(()),
        other => Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("unexpected SSLRequest answer {other:#04x}"),
        )),
    }
}
