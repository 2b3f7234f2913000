//! Asynchronous CSV reader for seed files
//!
//! Streams rows of one seed file in batches, converting each row through its
//! [`SeedRecord`] implementation.
//!
//! # Architecture
//!
//! ```text
//! seed file → AsyncReader<R, S> → batches of S::Output
//!                   ↓
//!           csv_format module
//!         (SeedRecord::convert)
//! ```
//!
//! Rows that fail to parse or convert are logged and skipped; reading
//! continues with the next row.

use crate::io::csv_format::SeedRecord;
use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::stream::StreamExt;
use std::marker::PhantomData;
use tracing::warn;

/// Asynchronous reader over the rows of one seed file
pub struct AsyncReader<R: AsyncRead + Unpin, S> {
    csv_reader: csv_async::AsyncDeserializer<R>,
    _record: PhantomData<fn() -> S>,
}

impl<R, S> AsyncReader<R, S>
where
    R: AsyncRead + Unpin + Send + 'static,
    S: SeedRecord,
{
    /// Create a new AsyncReader from an async reader
    ///
    /// Fields are trimmed and rows may omit trailing optional columns.
    pub fn new(reader: R) -> Self {
        let csv_reader = AsyncReaderBuilder::new()
            .flexible(true)
            .trim(csv_async::Trim::All)
            .create_deserializer(reader);

        Self {
            csv_reader,
            _record: PhantomData,
        }
    }

    /// Read up to `batch_size` converted rows
    ///
    /// Returns an empty vector once the file is exhausted.
    pub async fn read_batch(&mut self, batch_size: usize) -> Vec<S::Output> {
        let mut batch = Vec::with_capacity(batch_size);
        let mut records = self.csv_reader.deserialize::<S>();

        while batch.len() < batch_size {
            match records.next().await {
                Some(Ok(record)) => match record.convert() {
                    Ok(output) => batch.push(output),
                    Err(e) => warn!(file = S::FILE_NAME, error = %e, "Skipping seed row"),
                },
                Some(Err(e)) => warn!(file = S::FILE_NAME, error = %e, "CSV parse error"),
                None => break,
            }
        }

        batch
    }

    /// Read every remaining row
    pub async fn read_all(&mut self, batch_size: usize) -> Vec<S::Output> {
        let mut rows = Vec::new();
        loop {
            let batch = self.read_batch(batch_size).await;
            if batch.is_empty() {
                return rows;
            }
            rows.extend(batch);
        }
    }
}
