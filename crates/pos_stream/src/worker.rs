//! Background writer thread for multi-producer record generation.
//!
//! The original design parked finished records in a shared, mutex-guarded
//! buffer and had the writer thread poll it every 100 ms. This version sends
//! records over a bounded [`std::sync::mpsc`] channel instead: producers
//! never block on a lock, and the writer blocks on `recv()` rather than
//! sleeping, so a record is written the instant it's available.

use std::sync::mpsc::{self, Receiver, SyncSender};
use std::thread::JoinHandle;

use pos_types::buffer::PosBuffer;

use crate::error::StreamError;
use crate::stream::PosOutputStream;

/// A command sent from a producer thread to the writer thread.
pub enum WorkerCommand {
	/// A finished record from `thread_id`, to be written in arrival order.
	Record {
		/// Producer that generated this record; carried for logging only,
		/// the channel itself already fixes write order.
		thread_id: usize,
		/// The record to write.
		record: PosBuffer,
	},
	/// No more records will be sent; the writer should flush and exit.
	Shutdown,
}

/// A handle to a running writer thread. Producers clone [`Self::sender`] (an
/// `mpsc::SyncSender` is itself cloneable) to submit records; dropping every
/// clone closes the channel and lets the writer thread observe EOF without
/// an explicit [`WorkerCommand::Shutdown`].
pub struct CodecWorker {
	sender: SyncSender<WorkerCommand>,
	handle: JoinHandle<Result<usize, StreamError>>,
}

impl CodecWorker {
	/// Spawns the writer thread, bounding the channel to `capacity` pending
	/// records (backpressure on fast producers / a slow disk).
	pub fn spawn(mut output: Box<dyn PosOutputStream + Send>, capacity: usize) -> Self {
		let (sender, receiver) = mpsc::sync_channel(capacity.max(1));
		let handle = std::thread::spawn(move || run_writer(&mut *output, &receiver));
		Self { sender, handle }
	}

	/// A cloneable submission handle for producer threads.
	pub fn sender(&self) -> SyncSender<WorkerCommand> {
		self.sender.clone()
	}

	/// Signals shutdown and waits for the writer thread to flush and exit,
	/// returning the number of records it wrote.
	pub fn join(self) -> Result<usize, StreamError> {
		let _ = self.sender.send(WorkerCommand::Shutdown);
		drop(self.sender);
		match self.handle.join() {
			Ok(result) => result,
			Err(_) => Err(StreamError::OpenFailure {
				path: "<writer thread>".to_string(),
				source: std::io::Error::other("writer thread panicked"),
			}),
		}
	}
}

fn run_writer(output: &mut dyn PosOutputStream, receiver: &Receiver<WorkerCommand>) -> Result<usize, StreamError> {
	log::debug!("codec worker thread started");
	output.write_header()?;
	let mut written = 0usize;

	loop {
		match receiver.recv() {
			Ok(WorkerCommand::Record { thread_id, record }) => {
				output.write(&record)?;
				written += 1;
				log::trace!("wrote record #{written} from producer {thread_id}");
			}
			Ok(WorkerCommand::Shutdown) | Err(mpsc::RecvError) => break,
		}
	}

	output.write_footer()?;
	log::debug!("codec worker thread exiting, wrote {written} records");
	Ok(written)
}
