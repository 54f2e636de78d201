use std::path::Path;
use std::sync::mpsc;

use loupe_core::bitmap::Bitmap;

use crate::messages::{WorkerCommand, WorkerResult};

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("loupe-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn send_log(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Log { message: msg.into() });
}

fn send_error(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Error { message: msg.into() });
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::DecodeImage { path } => {
                handle_decode_image(&path, &tx, &ctx);
            }
        }
    }
}

fn handle_decode_image(path: &Path, tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context) {
    send_log(tx, ctx, format!("Decoding {}...", path.display()));

    match Bitmap::open(path) {
        Ok(bitmap) => send(
            tx,
            ctx,
            WorkerResult::ImageDecoded {
                path: path.to_path_buf(),
                bitmap,
            },
        ),
        Err(e) => send_error(tx, ctx, format!("Failed to decode {}: {e}", path.display())),
    }
}
