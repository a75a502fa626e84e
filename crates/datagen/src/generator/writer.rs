use crate::{Error, FieldSource, Record, Result};
use tokio::io::{AsyncWrite, AsyncWriteExt};

// Longest possible record: 10 + 4 + 7 + 10 field bytes and 4 commas.
const RECORD_CAPACITY: usize = 35;

/// Streams records into `sink` until exactly `max_bytes` bytes are written.
///
/// Each record is encoded once and handed to the sink with a single
/// `write_all(..).await`. That await is the only suspension point: when the
/// sink applies backpressure the task parks on it and resumes with the same
/// buffered record once the sink drains, so nothing is dropped, duplicated
/// or reordered.
///
/// The record that would cross the cap is cut to the remaining byte count,
/// which makes the total equal `max_bytes` whenever `max_bytes > 0`. Records
/// are ASCII, so the cut never splits a character.
///
/// The sink is flushed and shut down before returning.
///
/// # Errors
///
/// Returns [`Error::SinkWrite`] if the sink fails to accept, flush or close.
pub async fn write_records<W, S>(sink: &mut W, source: &S, max_bytes: u64) -> Result<u64>
where
    W: AsyncWrite + Unpin + ?Sized,
    S: FieldSource + ?Sized,
{
    let mut written: u64 = 0;
    let mut buf = Vec::with_capacity(RECORD_CAPACITY);

    while written < max_bytes {
        Record::draw(source).encode_into(&mut buf);

        let remaining = max_bytes - written;
        let take = usize::try_from(remaining).map_or(buf.len(), |r| r.min(buf.len()));

        sink.write_all(&buf[..take])
            .await
            .map_err(Error::SinkWrite)?;
        written += take as u64;
    }

    sink.flush().await.map_err(Error::SinkWrite)?;
    sink.shutdown().await.map_err(Error::SinkWrite)?;

    Ok(written)
}
