use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use ringbuf::traits::Producer;
use tracing::{error, info};

use super::chunk::SAMPLE_RATE;

/// Live microphone capture feeding a ring buffer with mono 16-bit PCM
/// at [`SAMPLE_RATE`].
///
/// The cpal stream lives as long as this struct; dropping it stops
/// capture. Failure to open the device or to get a 16 kHz config is a
/// fatal startup error surfaced to the caller, never degraded silently.
pub struct AudioCapture {
    _stream: cpal::Stream,
    pub sample_rate: u32,
}

impl AudioCapture {
    pub fn new<P>(mut producer: P) -> Result<Self, anyhow::Error>
    where
        P: Producer<Item = i16> + Send + 'static,
    {
        let host = cpal::default_host();
        let device = host
            .default_input_device()
            .ok_or_else(|| anyhow::anyhow!("no audio input device available"))?;

        info!("audio input device: {}", device.name().unwrap_or_default());

        // The recognizer is fixed at 16 kHz, so only configs covering that
        // rate are acceptable.
        let mut selected = None;
        for range in device.supported_input_configs()? {
            if range.min_sample_rate().0 <= SAMPLE_RATE
                && range.max_sample_rate().0 >= SAMPLE_RATE
            {
                selected = Some(range.with_sample_rate(cpal::SampleRate(SAMPLE_RATE)));
                break;
            }
        }
        let config = selected.ok_or_else(|| {
            anyhow::anyhow!("input device does not support {} Hz capture", SAMPLE_RATE)
        })?;

        info!(
            "audio config selected: rate={}Hz, channels={}",
            SAMPLE_RATE,
            config.channels()
        );

        let err_fn = |err| error!("an error occurred on stream: {}", err);

        let stream = match config.sample_format() {
            cpal::SampleFormat::I16 => device.build_input_stream(
                &config.into(),
                move |data: &[i16], _: &_| write_input_data(data, &mut producer),
                err_fn,
                None,
            )?,
            cpal::SampleFormat::F32 => device.build_input_stream(
                &config.into(),
                move |data: &[f32], _: &_| write_input_data_f32(data, &mut producer),
                err_fn,
                None,
            )?,
            _ => return Err(anyhow::anyhow!("unsupported sample format")),
        };

        stream.play()?;

        Ok(Self {
            _stream: stream,
            sample_rate: SAMPLE_RATE,
        })
    }
}

fn write_input_data<P>(input: &[i16], producer: &mut P)
where
    P: Producer<Item = i16>,
{
    // If the ring buffer is full we drop input (lossy); push_slice may
    // write a partial slice.
    producer.push_slice(input);
}

fn write_input_data_f32<P>(input: &[f32], producer: &mut P)
where
    P: Producer<Item = i16>,
{
    for &sample in input {
        let sample_i16 = (sample * i16::MAX as f32) as i16;
        let _ = producer.try_push(sample_i16);
    }
}
