use std::io;
use std::io::BufRead;
use std::thread;

use crossbeam_channel::{bounded, Receiver};

/// Reads lines from a blocking reader on a dedicated thread and hands them
/// to the main thread over a channel, so a demo can poll for telemetry
/// without blocking its render loop.
pub struct LineSource {
    pub from_reader_thread: Receiver<String>,
    pub reader_join_handle: thread::JoinHandle<()>,
}

impl LineSource {
    pub fn new<R: BufRead + Send + 'static>(reader: R) -> Self {
        let queue_capacity = 1000;
        let (to_main_thread, from_reader_thread) = bounded::<String>(queue_capacity);
        let reader_join_handle = thread::spawn(move || {
            for line in reader.lines() {
                match line {
                    Ok(line) => {
                        if to_main_thread.send(line).is_err() {
                            // Receiver dropped, nobody wants lines anymore.
                            break;
                        }
                    }
                    Err(e) => {
                        println!("Stopping line reader: {}", e);
                        break;
                    }
                }
            }
        });
        LineSource {
            from_reader_thread,
            reader_join_handle,
        }
    }

    pub fn from_stdin() -> Self {
        LineSource::new(io::BufReader::new(io::stdin()))
    }
}
