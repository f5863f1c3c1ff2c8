//! Basic usage example for cobskit
//!
//! Run with: cargo run --example basic_usage

use cobskit::*;

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> Result<(), Error> {
    println!("cobskit Basic Usage Example");
    println!("===========================");

    // Example 1: Payload with embedded zeros
    println!("\n1. Encode and Decode:");
    {
        let payload = [0x11, 0x22, 0x00, 0x33, 0x00];
        let frame = encode(&payload);

        println!("  Payload: {}", hex(&payload));
        println!("  Frame:   {}", hex(&frame));

        let decoded = decode(&frame)?;
        println!("  Decoded: {}", hex(&decoded));
        assert_eq!(decoded, payload);
    }

    // Example 2: Block structure of a long zero-free run
    println!("\n2. Block Structure:");
    {
        let payload: Vec<u8> = (1..=255u8).cycle().take(300).collect();
        for (i, block) in Blocks::new(&payload).enumerate() {
            println!(
                "  Block {}: code=0x{:02X}, {} data bytes, full={}",
                i,
                block.code,
                block.data.len(),
                block.is_full()
            );
        }
    }

    // Example 3: Allocation-free encoding into a fixed buffer
    println!("\n3. Fixed Buffer Encoding:");
    {
        const PAYLOAD_LEN: usize = 32;
        let payload = [0xA5u8; PAYLOAD_LEN];
        let mut frame = [0u8; encoded_size(PAYLOAD_LEN)];

        let size = encode_into(&payload, &mut frame)?;
        println!(
            "  Encoded {} bytes into a {}-byte buffer",
            size,
            frame.len()
        );

        let mut out = [0u8; decoded_size(encoded_size(PAYLOAD_LEN))];
        let len = decode_into(&frame[..size], &mut out)?;
        println!("  Decoded {} bytes back", len);
    }

    // Example 4: Several frames in one stream buffer
    println!("\n4. Stream of Frames:");
    {
        let mut buf = [0u8; 128];
        let mut encoder = FrameEncoder::new(&mut buf);
        encoder.push_frame(b"hello")?;
        encoder.push_frame(&[0x00, 0x00])?;
        encoder.push_frame(b"")?;
        encoder.push_frame(b"world")?;

        let written = encoder.position();
        let stream = &buf[..written];
        println!("  Stream: {}", hex(stream));

        for frame in split_frames(stream) {
            let payload = decode(frame)?;
            println!("  Frame {:<24} -> {:?}", hex(frame), payload);
        }
    }

    // Example 5: Malformed frames
    println!("\n5. Malformed Frames:");
    {
        let cases: [&[u8]; 3] = [
            &[0x05, 0x01, 0x02],
            &[0x02, 0x01, 0x00, 0x02, 0x01, 0x00],
            &[0x00],
        ];

        for frame in cases {
            match decode(frame) {
                Ok(payload) => println!("  {:<20} -> ok {:?}", hex(frame), payload),
                Err(e) => println!("  {:<20} -> error: {}", hex(frame), e),
            }
        }
    }

    // Example 6: Overhead analysis
    println!("\n6. Overhead Analysis:");
    {
        for len in [0usize, 1, 100, 254, 255, 1000] {
            let worst = vec![0x01u8; len];
            println!(
                "  {:>5} bytes: worst case {} bytes, bound {}",
                len,
                encode(&worst).len(),
                encoded_size(len)
            );
        }
    }

    println!("\nAll examples completed successfully!");
    Ok(())
}
