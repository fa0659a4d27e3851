use std::thread;
use std::time::Duration;

use attitude_dsp::stream::{ChannelFrame, StreamController, TickFrame};
use dev_helpers::{start_ws_server, AttitudeSimulator};
use serde::Serialize;

#[derive(Serialize)]
struct PlotChannel {
    #[serde(rename = "true")]
    true_value: f64,
    noisy: f64,
    filtered: f64,
}

impl From<ChannelFrame> for PlotChannel {
    fn from(frame: ChannelFrame) -> Self {
        PlotChannel {
            true_value: frame.true_value,
            noisy: frame.noisy_value,
            filtered: frame.filtered_value,
        }
    }
}

#[derive(Serialize)]
struct PlotMessage {
    t: f64,
    pitch: PlotChannel,
    roll: PlotChannel,
}

impl From<TickFrame> for PlotMessage {
    fn from(frame: TickFrame) -> Self {
        PlotMessage {
            t: frame.pitch.elapsed_seconds,
            pitch: frame.pitch.into(),
            roll: frame.roll.into(),
        }
    }
}

fn main() {
    const WS_ADDR: &str = "127.0.0.1:9876";
    const TICK_INTERVAL_MS: u64 = 50;

    let server = start_ws_server(WS_ADDR);
    let mut simulator = AttitudeSimulator::new(11);
    let mut controller = StreamController::new();

    println!("Serving plot frames on ws://{}", WS_ADDR);
    println!("Emitting one synthetic tick every {} ms", TICK_INTERVAL_MS);

    loop {
        thread::sleep(Duration::from_millis(TICK_INTERVAL_MS));

        while let Ok(msg) = server.rx_recv.try_recv() {
            println!("Incoming ws message '{}'", msg);
        }

        // Going through the wire format keeps this demo honest: the frames
        // browsers see took the same path a real device stream would.
        let line = simulator.next_line();
        if let Some(frame) = controller.handle_line(&line) {
            let message = serde_json::to_string(&PlotMessage::from(frame)).unwrap();
            if server.tx_send.send(message).is_err() {
                println!("Broadcaster gone, shutting down");
                break;
            }
        }
    }
}
