use std::io::{self, Write};

use tonic::metadata::{KeyAndValueRef, MetadataMap};

use crate::whereami::WhereamiReply;

const NONE_RECEIVED: &str = "(none received)";

/// Prints metadata entries as `key: value`, one per line, or an explicit
/// notice when the map is empty.
pub fn write_metadata<W: Write>(out: &mut W, metadata: &MetadataMap) -> io::Result<()> {
    if metadata.is_empty() {
        return writeln!(out, "{NONE_RECEIVED}");
    }
    for entry in metadata.iter() {
        match entry {
            KeyAndValueRef::Ascii(key, value) => {
                writeln!(out, "{key}: {}", value.to_str().unwrap_or("<invalid ascii>"))?;
            }
            KeyAndValueRef::Binary(key, value) => {
                writeln!(out, "{key}: {value:?}")?;
            }
        }
    }
    Ok(())
}

/// Prints the set fields of the reply as `name: value` in proto field
/// order. A present `backend_result` prints its own set fields indented
/// one level; deeper nesting is not expected from the service.
pub fn write_reply<W: Write>(out: &mut W, reply: &WhereamiReply) -> io::Result<()> {
    for (name, value) in scalar_fields(reply) {
        writeln!(out, "{name}: {value}")?;
    }
    if let Some(backend) = reply.backend_result.as_deref() {
        writeln!(out, "backend_result:")?;
        for (name, value) in scalar_fields(backend) {
            writeln!(out, "  {name}: {value}")?;
        }
    }
    Ok(())
}

fn scalar_fields(reply: &WhereamiReply) -> impl Iterator<Item = (&'static str, &str)> {
    [
        ("cluster_name", reply.cluster_name.as_str()),
        ("host_header", reply.host_header.as_str()),
        ("metadata", reply.metadata.as_str()),
        ("node_name", reply.node_name.as_str()),
        ("pod_ip", reply.pod_ip.as_str()),
        ("pod_name", reply.pod_name.as_str()),
        ("pod_namespace", reply.pod_namespace.as_str()),
        ("pod_service_account", reply.pod_service_account.as_str()),
        ("project_id", reply.project_id.as_str()),
        ("timestamp", reply.timestamp.as_str()),
        ("zone", reply.zone.as_str()),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
}
