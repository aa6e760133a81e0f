#![allow(dead_code)]
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

pub const TYPE_A: u16 = 1;
pub const TYPE_TXT: u16 = 16;

pub const RCODE_NOERROR: u8 = 0;
pub const RCODE_SERVFAIL: u8 = 2;
pub const RCODE_NXDOMAIN: u8 = 3;

/// Answer data the mock server knows how to encode
#[derive(Debug, Clone)]
pub enum MockAnswer {
    A([u8; 4]),
    Txt(String),
}

impl MockAnswer {
    fn rtype(&self) -> u16 {
        match self {
            MockAnswer::A(_) => TYPE_A,
            MockAnswer::Txt(_) => TYPE_TXT,
        }
    }

    fn rdata(&self) -> Vec<u8> {
        match self {
            MockAnswer::A(octets) => octets.to_vec(),
            // Character-strings carry a one-byte length: split long text
            MockAnswer::Txt(text) => {
                let mut rdata = Vec::with_capacity(text.len() + text.len() / 255 + 1);
                for chunk in text.as_bytes().chunks(255) {
                    rdata.push(chunk.len() as u8);
                    rdata.extend_from_slice(chunk);
                }
                if text.is_empty() {
                    rdata.push(0);
                }
                rdata
            }
        }
    }
}

/// How the mock server reacts to queries
#[derive(Debug, Clone, Default)]
pub struct MockBehavior {
    /// Answers keyed by question type
    pub answers: HashMap<u16, Vec<MockAnswer>>,
    /// RCODE for questions with no configured answers
    pub empty_rcode: u8,
    /// Reply with an ID that does not match the query
    pub mismatch_id: bool,
    /// Read the query, then close the connection without replying
    pub close_without_reply: bool,
    /// Read the query and never reply
    pub silent: bool,
}

impl MockBehavior {
    pub fn nxdomain() -> Self {
        Self {
            empty_rcode: RCODE_NXDOMAIN,
            ..Self::default()
        }
    }

    pub fn answer(mut self, qtype: u16, answer: MockAnswer) -> Self {
        self.answers.entry(qtype).or_default().push(answer);
        self
    }
}

/// TCP DNS server for tests.
///
/// Speaks length-prefixed DNS over TCP and answers from a fixed
/// `MockBehavior`. Every question type it receives is recorded in order.
pub struct MockDnsServer {
    addr: SocketAddr,
    received: Arc<Mutex<Vec<u16>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    /// Start on an ephemeral port on 127.0.0.1
    pub async fn start(behavior: MockBehavior) -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let received = Arc::new(Mutex::new(Vec::new()));

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let behavior = Arc::new(behavior);
        let seen = Arc::clone(&received);
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    accepted = listener.accept() => {
                        if let Ok((stream, _)) = accepted {
                            let behavior = Arc::clone(&behavior);
                            let seen = Arc::clone(&seen);
                            tokio::spawn(Self::serve(stream, behavior, seen));
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            received,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Question types received so far, in arrival order
    pub fn received_types(&self) -> Vec<u16> {
        self.received.lock().unwrap().clone()
    }

    async fn serve(
        mut stream: TcpStream,
        behavior: Arc<MockBehavior>,
        seen: Arc<Mutex<Vec<u16>>>,
    ) {
        loop {
            let mut len_buf = [0u8; 2];
            if stream.read_exact(&mut len_buf).await.is_err() {
                return;
            }
            let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
            if stream.read_exact(&mut query).await.is_err() {
                return;
            }

            let Some((qtype, question_end)) = Self::parse_question(&query) else {
                return;
            };
            seen.lock().unwrap().push(qtype);

            if behavior.close_without_reply {
                return;
            }
            if behavior.silent {
                std::future::pending::<()>().await;
            }

            let response = Self::build_response(&query, qtype, question_end, &behavior);
            let mut framed = (response.len() as u16).to_be_bytes().to_vec();
            framed.extend_from_slice(&response);
            if stream.write_all(&framed).await.is_err() {
                return;
            }
        }
    }

    /// Walk the question name; return (QTYPE, end offset of the question)
    fn parse_question(query: &[u8]) -> Option<(u16, usize)> {
        let mut pos = 12;
        loop {
            let len = *query.get(pos)? as usize;
            pos += 1;
            if len == 0 {
                break;
            }
            pos += len;
        }
        let qtype = u16::from_be_bytes([*query.get(pos)?, *query.get(pos + 1)?]);
        let end = pos + 4;
        if end > query.len() {
            return None;
        }
        Some((qtype, end))
    }

    fn build_response(
        query: &[u8],
        qtype: u16,
        question_end: usize,
        behavior: &MockBehavior,
    ) -> Vec<u8> {
        let answers = behavior.answers.get(&qtype).cloned().unwrap_or_default();
        let rcode = if answers.is_empty() {
            behavior.empty_rcode
        } else {
            RCODE_NOERROR
        };

        let mut response = Vec::with_capacity(512);

        // Transaction ID
        if behavior.mismatch_id {
            response.push(query[0] ^ 0xFF);
            response.push(query[1] ^ 0xFF);
        } else {
            response.extend_from_slice(&query[0..2]);
        }

        // QR=1, RD=1 / RA=1, RCODE
        response.push(0x81);
        response.push(0x80 | (rcode & 0x0F));

        response.extend_from_slice(&[0x00, 0x01]); // QDCOUNT
        response.extend_from_slice(&(answers.len() as u16).to_be_bytes()); // ANCOUNT
        response.extend_from_slice(&[0x00, 0x00]); // NSCOUNT
        response.extend_from_slice(&[0x00, 0x00]); // ARCOUNT

        response.extend_from_slice(&query[12..question_end]);

        for answer in &answers {
            let rdata = answer.rdata();
            response.extend_from_slice(&[0xc0, 0x0c]); // pointer to question name
            response.extend_from_slice(&answer.rtype().to_be_bytes());
            response.extend_from_slice(&[0x00, 0x01]); // class IN
            response.extend_from_slice(&300u32.to_be_bytes());
            response.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
            response.extend_from_slice(&rdata);
        }

        response
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// An address nothing is listening on
pub async fn closed_port_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}
