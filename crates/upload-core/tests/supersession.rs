//! Inline reads racing with further selections.

use std::cell::RefCell;
use std::rc::Rc;

use tokio::sync::oneshot;
use upload_core::{
    FileLike, FileUpload, MemoryFile, PreviewBackend, PreviewError, ReadOutcome, ReadTicket,
    UploadEvent, UploadOptions, encode_data_url,
};

struct NoHandles;

impl PreviewBackend<MemoryFile> for NoHandles {
    type Handle = ();

    fn acquire(&mut self, _file: &MemoryFile) -> Result<(), PreviewError> {
        Ok(())
    }

    fn release(&mut self, _handle: ()) {}
}

type Shared = Rc<RefCell<FileUpload<MemoryFile, NoHandles>>>;

fn shared() -> Shared {
    Rc::new(RefCell::new(FileUpload::new(UploadOptions::default(), NoHandles)))
}

/// Stand-in for the browser read: yields once, then encodes.
async fn read_data_url(file: &MemoryFile) -> Result<String, PreviewError> {
    tokio::task::yield_now().await;
    if file.bytes().is_empty() {
        return Err(PreviewError::read("empty file"));
    }
    Ok(encode_data_url(&file.media_type(), file.bytes()))
}

/// Waits for `go`, performs the read, applies it.
async fn finish_read(
    upload: Shared,
    ticket: ReadTicket<MemoryFile>,
    go: oneshot::Receiver<()>,
) -> ReadOutcome {
    go.await.expect("driver dropped");
    let result = read_data_url(&ticket.file).await;
    upload.borrow_mut().complete_read(ticket.id, result)
}

fn pick(upload: &Shared, file: MemoryFile) -> ReadTicket<MemoryFile> {
    upload
        .borrow_mut()
        .dispatch(UploadEvent::PickerChange(Some(file)))
        .read
        .expect("image selection issues a read")
}

#[tokio::test]
async fn test_single_read_applies_encoding() {
    let upload = shared();
    let file = MemoryFile::new("a.png", "image/png", b"\x89PNG".to_vec());
    let ticket = pick(&upload, file.clone());

    let (tx, rx) = oneshot::channel();
    tx.send(()).unwrap();
    let outcome = finish_read(upload.clone(), ticket, rx).await;

    assert_eq!(outcome, ReadOutcome::Applied);
    let expected = encode_data_url("image/png", file.bytes());
    assert_eq!(upload.borrow().preview().inline(), Some(expected.as_str()));
}

#[tokio::test]
async fn test_stale_read_finishing_last_is_discarded() {
    let upload = shared();
    let a = MemoryFile::new("a.png", "image/png", b"aaaa".to_vec());
    let b = MemoryFile::new("b.png", "image/png", b"bbbb".to_vec());

    let first = pick(&upload, a);
    let second = pick(&upload, b.clone());

    let (tx_a, rx_a) = oneshot::channel();
    let (tx_b, rx_b) = oneshot::channel();
    let driver = async move {
        tx_b.send(()).unwrap();
        tokio::task::yield_now().await;
        tokio::task::yield_now().await;
        tx_a.send(()).unwrap();
    };

    let (out_a, out_b, ()) = tokio::join!(
        finish_read(upload.clone(), first, rx_a),
        finish_read(upload.clone(), second, rx_b),
        driver,
    );

    assert_eq!(out_a, ReadOutcome::Stale);
    assert_eq!(out_b, ReadOutcome::Applied);
    let expected = encode_data_url("image/png", b.bytes());
    assert_eq!(upload.borrow().preview().inline(), Some(expected.as_str()));
}

#[tokio::test]
async fn test_stale_read_finishing_first_is_discarded() {
    let upload = shared();
    let a = MemoryFile::new("a.png", "image/png", b"aaaa".to_vec());
    let b = MemoryFile::new("b.gif", "image/gif", b"bbbb".to_vec());

    let first = pick(&upload, a);
    let second = pick(&upload, b.clone());

    let (tx_a, rx_a) = oneshot::channel();
    tx_a.send(()).unwrap();
    assert_eq!(
        finish_read(upload.clone(), first, rx_a).await,
        ReadOutcome::Stale
    );
    // The latest selection is still waiting for its own read
    assert!(upload.borrow().preview().is_pending());

    let (tx_b, rx_b) = oneshot::channel();
    tx_b.send(()).unwrap();
    assert_eq!(
        finish_read(upload.clone(), second, rx_b).await,
        ReadOutcome::Applied
    );
    let expected = encode_data_url("image/gif", b.bytes());
    assert_eq!(upload.borrow().preview().inline(), Some(expected.as_str()));
}

#[tokio::test]
async fn test_read_after_clear_is_discarded() {
    let upload = shared();
    let ticket = pick(&upload, MemoryFile::new("a.png", "image/png", b"a".to_vec()));
    upload.borrow_mut().dispatch(UploadEvent::ClearPressed);

    let (tx, rx) = oneshot::channel();
    tx.send(()).unwrap();
    assert_eq!(finish_read(upload.clone(), ticket, rx).await, ReadOutcome::Stale);

    let state = upload.borrow();
    assert!(state.file().is_none());
    assert!(state.preview().is_none());
}

#[tokio::test]
async fn test_failed_read_is_not_left_pending() {
    let upload = shared();
    let ticket = pick(&upload, MemoryFile::new("empty.png", "image/png", Vec::new()));

    let (tx, rx) = oneshot::channel();
    tx.send(()).unwrap();
    assert_eq!(finish_read(upload.clone(), ticket, rx).await, ReadOutcome::Failed);

    let state = upload.borrow();
    assert!(state.preview().is_none());
    assert_eq!(state.file().map(FileLike::name), Some("empty.png".to_string()));
}

#[tokio::test]
async fn test_escape_closes_lightbox_keeps_selection() {
    let upload = shared();
    let file = MemoryFile::new("a.png", "image/png", b"a".to_vec());
    let ticket = pick(&upload, file.clone());

    let (tx, rx) = oneshot::channel();
    tx.send(()).unwrap();
    finish_read(upload.clone(), ticket, rx).await;

    let mut state = upload.borrow_mut();
    state.dispatch(UploadEvent::PreviewClick);
    assert!(state.is_lightbox_open());

    let effects = state.dispatch(UploadEvent::KeyDown("Escape".to_string()));
    assert!(effects.change.is_none());
    assert!(!state.is_lightbox_open());
    assert_eq!(state.file(), Some(&file));
}
