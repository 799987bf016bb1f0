//! Read a fixed SSE document event by event.

use sse_core::{ReaderSource, Stream, StreamConfig};

const SSE_DATA: &str = "id: 1
event: message
data: Hello, World!

id: 2
event: notification
data: This is a notification
data: with multiple lines

id: 3
data: Simple message without event type

";

fn main() -> Result<(), sse_core::Error> {
    println!("Reading SSE events from stream:");
    println!("================================");

    let mut stream = Stream::new(ReaderSource::new(SSE_DATA.as_bytes()));
    loop {
        match stream.recv()? {
            Some(event) => {
                println!("Event ID: {:?}", event.last_event_id);
                println!("Event Type: {:?}", event.event_type);
                println!("Event Data: {:?}", event.data);
                println!("---");
            }
            None => {
                println!("End of stream reached");
                break;
            }
        }
    }
    stream.close()?;

    println!();
    println!("Example with configuration:");
    println!("===========================");

    let config = StreamConfig::new().max_event_size(1024);
    let mut stream = Stream::with_config(ReaderSource::new(&b"data: Small event\n\n"[..]), config);
    if let Some(event) = stream.recv()? {
        println!("Configured stream event: {:?}", event.data);
    }
    stream.close()
}
