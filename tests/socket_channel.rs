// Full path through a real Unix socket: init, front-end writes, teardown.

mod common;
use crate::common::{AddLineBuilder, ConfigFileBuilder, RecordingSink, init_tracing, with_timeout};

use std::error::Error;

use tempfile::tempdir;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::UnixStream;

use runners::channel::{ChannelReply, join_command, send_line};
use runners::device::Device;
use runners::errors::RunnersError;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn front_end_joins_arguments_with_single_spaces() {
    let line = join_command(&["ADD", "3", "101", "Ana", "Lincoln", "12.34", "11.00"]);
    assert_eq!(line, "ADD 3 101 Ana Lincoln 12.34 11.00\n");
    assert_eq!(join_command(&["PRINT"]), "PRINT\n");
}

#[test]
fn status_lines_round_trip() {
    assert_eq!("OK 12\n".parse::<ChannelReply>(), Ok(ChannelReply::Accepted(12)));
    assert_eq!(
        "ERR invalid-argument: too long".parse::<ChannelReply>(),
        Ok(ChannelReply::Rejected {
            kind: "invalid-argument".to_string(),
            message: "too long".to_string()
        })
    );
    assert!("HELLO".parse::<ChannelReply>().is_err());
}

#[tokio::test]
async fn commands_over_the_socket_reach_the_roster() -> TestResult {
    init_tracing();
    let dir = tempdir()?;
    let socket = dir.path().join("runners.sock");
    let cfg = ConfigFileBuilder::new().socket_path(&socket).build();

    let sink = RecordingSink::new();
    let device = Device::init(&cfg, sink.clone())?;
    assert_eq!(device.socket_path(), socket.as_path());
    assert!(socket.exists());

    let add = join_command(&["ADD", "3", "101", "Ana", "Lincoln", "12.34", "11.00"]);
    let reply = with_timeout(send_line(&socket, &add)).await?;
    assert_eq!(reply, ChannelReply::Accepted(add.len()));

    let reply = with_timeout(send_line(&socket, "PRINT\n")).await?;
    assert!(reply.is_accepted());

    assert_eq!(
        sink.last_listing().unwrap(),
        vec![
            "Lane: 3 | Bib: 101 | Name: Ana | School: Lincoln | \
             Qualifier Time: 12.34 | Personal Record: 11.00"
        ]
    );

    // Silent drop still reports the bytes as accepted.
    let reply = with_timeout(send_line(&socket, "FOO bar\n")).await?;
    assert_eq!(reply, ChannelReply::Accepted(8));

    assert_eq!(device.teardown().await?, 1);
    assert!(!socket.exists());
    Ok(())
}

#[tokio::test]
async fn oversized_payload_is_rejected_over_the_socket() -> TestResult {
    init_tracing();
    let dir = tempdir()?;
    let socket = dir.path().join("runners.sock");
    let cfg = ConfigFileBuilder::new()
        .socket_path(&socket)
        .max_line_bytes(32)
        .build();

    let sink = RecordingSink::new();
    let device = Device::init(&cfg, sink.clone())?;

    let line = AddLineBuilder::new(1).build();
    assert!(line.len() >= 32);

    let reply = with_timeout(send_line(&socket, &line)).await?;
    match reply {
        ChannelReply::Rejected { kind, .. } => assert_eq!(kind, "invalid-argument"),
        other => panic!("expected rejection, got {other:?}"),
    }
    assert!(sink.records().is_empty());

    assert_eq!(device.teardown().await?, 0);
    Ok(())
}

#[tokio::test]
async fn concurrent_socket_writers_all_land() -> TestResult {
    init_tracing();
    let dir = tempdir()?;
    let socket = dir.path().join("runners.sock");
    let cfg = ConfigFileBuilder::new().socket_path(&socket).build();

    let sink = RecordingSink::new();
    let device = Device::init(&cfg, sink.clone())?;

    let mut tasks = Vec::new();
    for bib in 0..20 {
        let socket = socket.clone();
        tasks.push(tokio::spawn(async move {
            send_line(&socket, &AddLineBuilder::new(bib).build()).await
        }));
    }
    for t in tasks {
        assert!(with_timeout(t).await??.is_accepted());
    }

    assert_eq!(device.teardown().await?, 20);
    Ok(())
}

fn expect_rejected(reply: ChannelReply, expected: &str) {
    match reply {
        ChannelReply::Rejected { kind, .. } => assert_eq!(kind, expected),
        other => panic!("expected {expected} rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn payload_far_beyond_the_socket_buffer_is_still_invalid_argument() -> TestResult {
    init_tracing();
    let dir = tempdir()?;
    let socket = dir.path().join("runners.sock");
    let cfg = ConfigFileBuilder::new().socket_path(&socket).build();

    let sink = RecordingSink::new();
    let device = Device::init(&cfg, sink.clone())?;

    // The server stops reading after 100 bytes and hangs up while the client
    // is still pushing the rest.
    for size in [300_000, 4_000_000] {
        let line = format!("ADD {}\n", "x".repeat(size));
        let reply = with_timeout(send_line(&socket, &line)).await?;
        expect_rejected(reply, "invalid-argument");
    }
    assert!(sink.records().is_empty());

    // The channel is still usable afterwards.
    let reply = with_timeout(send_line(&socket, &AddLineBuilder::new(7).build())).await?;
    assert!(reply.is_accepted());

    assert_eq!(device.teardown().await?, 1);
    Ok(())
}

#[tokio::test]
async fn stalled_writer_gets_a_transfer_fault() -> TestResult {
    init_tracing();
    let dir = tempdir()?;
    let socket = dir.path().join("runners.sock");
    let cfg = ConfigFileBuilder::new()
        .socket_path(&socket)
        .read_timeout_ms(100)
        .build();

    let sink = RecordingSink::new();
    let device = Device::init(&cfg, sink.clone())?;

    // Half a line and no end of stream: the server must not wait forever.
    let mut stream = UnixStream::connect(&socket).await?;
    stream.write_all(b"ADD 1 2 Ana").await?;

    let mut status = String::new();
    with_timeout(BufReader::new(&mut stream).read_line(&mut status)).await?;
    expect_rejected(status.parse::<ChannelReply>()?, "transfer-fault");
    assert!(sink.records().is_empty());

    assert_eq!(device.teardown().await?, 0);
    Ok(())
}

#[tokio::test]
async fn teardown_removes_the_socket_even_if_the_manager_is_gone() -> TestResult {
    init_tracing();
    let dir = tempdir()?;
    let socket = dir.path().join("runners.sock");
    let cfg = ConfigFileBuilder::new().socket_path(&socket).build();

    let device = Device::init(&cfg, RecordingSink::new())?;
    device.handle().write(AddLineBuilder::new(1).build().as_bytes()).await?;
    assert_eq!(with_timeout(device.handle().shutdown()).await?, 1);

    let err = with_timeout(device.teardown()).await.unwrap_err();
    assert!(matches!(err, RunnersError::ManagerStopped), "got {err:?}");
    assert!(!socket.exists());
    Ok(())
}
