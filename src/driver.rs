use std::io::Write;

use anyhow::{Context, anyhow};
use tonic::Request;
use tonic::client::Grpc;
use tonic::codec::ProstCodec;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::Endpoint;
use tracing::{debug, info};

use crate::error::ClientError;
use crate::render;
use crate::whereami::{Empty, WhereamiReply};

pub const CLIENT_NAME: &str = "whereami-rust-cli";
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

const GET_PAYLOAD_PATH: &str = "/whereami.Whereami/GetPayload";

/// Correlation metadata attached to every request, in transmission
/// order. Only `request-id` varies across iterations.
pub fn correlation_metadata(request_id: i64) -> Vec<(&'static str, String)> {
    vec![
        ("client-name", CLIENT_NAME.to_string()),
        ("client-version", CLIENT_VERSION.to_string()),
        ("request-id", request_id.to_string()),
    ]
}

/// Issues `count` GetPayload calls against `server_address` and writes
/// the per-call sections to `out`.
///
/// The channel connects lazily, so connection failures surface as a
/// status-bearing error on the first call. A count of zero or less
/// issues no calls. The first failed call aborts the remaining
/// iterations.
pub async fn run<W: Write>(
    server_address: &str,
    count: i64,
    out: &mut W,
) -> Result<(), ClientError> {
    let endpoint = Endpoint::from_shared(format!("http://{server_address}"))
        .with_context(|| format!("invalid server address {server_address:?}"))?;
    let mut grpc = Grpc::new(endpoint.connect_lazy());
    info!(server_address, count, "issuing GetPayload calls");

    for i in 1..=count {
        let metadata = correlation_metadata(i);

        writeln!(out, "=== Request {i} of {count} ===")?;
        writeln!(out)?;
        writeln!(out, "--- Request Metadata ---")?;
        for (key, value) in &metadata {
            writeln!(out, "{key}: {value}")?;
        }
        out.flush()?;

        let mut request = Request::new(Empty {});
        for (key, value) in &metadata {
            let value = value
                .parse()
                .with_context(|| format!("metadata value for {key} is not valid ascii"))?;
            request.metadata_mut().insert(*key, value);
        }

        debug!(request_id = i, "calling Whereami.GetPayload");
        grpc.ready()
            .await
            .map_err(|e| tonic::Status::from_error(Box::new(e)))?;
        let codec: ProstCodec<Empty, WhereamiReply> = ProstCodec::default();
        let response = grpc
            .server_streaming(request, PathAndQuery::from_static(GET_PAYLOAD_PATH), codec)
            .await?;

        // Taking the response apart at the stream level keeps leading
        // and trailing metadata separate; the generated unary client
        // merges trailers into the header map.
        let (leading, mut stream, _extensions) = response.into_parts();
        let reply = stream
            .message()
            .await?
            .ok_or_else(|| anyhow!("server closed the stream without sending a payload"))?;
        let trailing = stream.trailers().await?;

        writeln!(out)?;
        writeln!(out, "--- Response Leading Metadata ---")?;
        render::write_metadata(out, &leading)?;
        writeln!(out)?;
        writeln!(out, "--- Response Payload ---")?;
        render::write_reply(out, &reply)?;
        writeln!(out)?;
        writeln!(out, "--- Response Trailing Metadata ---")?;
        match &trailing {
            Some(map) => render::write_metadata(out, map)?,
            None => writeln!(out, "(none received)")?,
        }
        writeln!(out)?;
        out.flush()?;
    }

    Ok(())
}
