//! Tests for WAV file writer.

use reclip::reassembler::WavWriter;
use tempfile::TempDir;

#[test]
fn test_write_clip_creates_output_directory() {
    let temp_dir = TempDir::new().unwrap();
    let out_dir = temp_dir.path().join("reconcatenated");
    let writer = WavWriter::new(out_dir.clone());

    let samples: Vec<f32> = (0..44100).map(|i| (i as f32 * 0.01).sin()).collect();

    let path = writer
        .write_clip("abc123", &[samples.clone(), samples], 44100)
        .unwrap();

    assert!(out_dir.is_dir());
    assert!(path.exists());
    assert_eq!(path.file_name().unwrap(), "abc123.wav");
}

#[test]
fn test_written_wav_is_valid_stereo() {
    let temp_dir = TempDir::new().unwrap();
    let writer = WavWriter::new(temp_dir.path().to_path_buf());

    let left: Vec<f32> = vec![0.0; 44100];
    let right: Vec<f32> = vec![0.0; 44100];

    let path = writer.write_clip("abc123", &[left, right], 44100).unwrap();

    let reader = hound::WavReader::open(&path).unwrap();
    let spec = reader.spec();

    assert_eq!(spec.sample_rate, 44100);
    assert_eq!(spec.channels, 2);
    assert_eq!(spec.bits_per_sample, 16);
    // Interleaved sample count: frames * channels.
    assert_eq!(reader.len(), 44100 * 2);
}

#[test]
fn test_write_clip_mono() {
    let temp_dir = TempDir::new().unwrap();
    let writer = WavWriter::new(temp_dir.path().to_path_buf());

    let samples: Vec<f32> = vec![0.25; 1000];

    let path = writer.write_clip("xyz789", &[samples], 22050).unwrap();

    let reader = hound::WavReader::open(&path).unwrap();
    assert_eq!(reader.spec().channels, 1);
    assert_eq!(reader.spec().sample_rate, 22050);
    assert_eq!(reader.len(), 1000);
}

#[test]
fn test_channels_are_interleaved() {
    let temp_dir = TempDir::new().unwrap();
    let writer = WavWriter::new(temp_dir.path().to_path_buf());

    let left: Vec<f32> = vec![0.5; 10];
    let right: Vec<f32> = vec![-0.5; 10];

    let path = writer.write_clip("abc123", &[left, right], 44100).unwrap();

    let mut reader = hound::WavReader::open(&path).unwrap();
    let samples: Vec<i16> = reader.samples::<i16>().map(Result::unwrap).collect();

    assert_eq!(samples.len(), 20);
    for frame in samples.chunks(2) {
        assert!(frame[0] > 0, "left channel sample should be positive");
        assert!(frame[1] < 0, "right channel sample should be negative");
    }
}

#[test]
fn test_unequal_channel_lengths_cap_frame_count() {
    let temp_dir = TempDir::new().unwrap();
    let writer = WavWriter::new(temp_dir.path().to_path_buf());

    let left: Vec<f32> = vec![0.5; 10];
    let right: Vec<f32> = vec![-0.5; 4];

    let path = writer.write_clip("abc123", &[left, right], 44100).unwrap();

    let reader = hound::WavReader::open(&path).unwrap();
    // 4 complete frames of 2 channels; no panic on the longer buffer.
    assert_eq!(reader.len(), 4 * 2);
}

#[test]
fn test_samples_clamped_to_valid_range() {
    let temp_dir = TempDir::new().unwrap();
    let writer = WavWriter::new(temp_dir.path().to_path_buf());

    let samples: Vec<f32> = vec![2.0, -2.0, 0.0];

    let path = writer.write_clip("abc123", &[samples], 44100).unwrap();

    let mut reader = hound::WavReader::open(&path).unwrap();
    let samples: Vec<i16> = reader.samples::<i16>().map(Result::unwrap).collect();

    assert_eq!(samples[0], i16::MAX);
    assert_eq!(samples[1], -i16::MAX);
    assert_eq!(samples[2], 0);
}
