#![allow(dead_code)]

use axum::extract::ConnectInfo;
use request_logger::prelude::*;
use serde_json::Value;
use std::io::{self, Write};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tower::Layer;

/// Keeps raw records and raw console text for inspection.
#[derive(Default)]
pub struct MemorySink {
    records: Mutex<Vec<Vec<u8>>>,
    raw: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn records(&self) -> Vec<Value> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .map(|r| serde_json::from_slice(r).unwrap())
            .collect()
    }

    pub fn raw(&self) -> Vec<String> {
        self.raw.lock().unwrap().clone()
    }
}

impl RecordSink for MemorySink {
    fn write_record(&self, record: &[u8]) -> io::Result<()> {
        self.records.lock().unwrap().push(record.to_vec());
        Ok(())
    }

    fn write_raw(&self, text: &str) -> io::Result<()> {
        self.raw.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Cloneable in-memory writer standing in for stdout.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub fn memory_logger() -> (Arc<Logger>, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::default());
    let logger = Logger::new(sink.clone()).unwrap();
    (Arc::new(logger), sink)
}

pub fn console_logger() -> (Arc<Logger>, SharedBuffer) {
    let buffer = SharedBuffer::default();
    let logger = Logger::new(Arc::new(ConsoleWriter::new(buffer.clone()))).unwrap();
    (Arc::new(logger), buffer)
}

#[derive(Clone)]
pub struct MockConnectInfoLayer(pub SocketAddr);

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService {
            inner,
            addr: self.0,
        }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
    addr: SocketAddr,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        req.extensions_mut().insert(ConnectInfo(self.addr));
        self.inner.call(req)
    }
}
