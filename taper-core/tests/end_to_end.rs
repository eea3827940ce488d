use ndarray::{array, Array2};
use taper_core::{
    buffer::Samples,
    pipeline::{run_with, TaperConfig},
    wav::{read_wav, write_wav},
    AudioBuffer, QuantizePolicy, SampleFormat, TaperError,
};

struct Scratch {
    config: TaperConfig,
}

impl Scratch {
    fn new(tag: &str) -> Self {
        let dir = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        let id = format!("{}-{tag}-{nanos}", std::process::id());
        Self {
            config: TaperConfig {
                input_path: dir.join(format!("taper-e2e-in-{id}.wav")),
                output_path: dir.join(format!("taper-e2e-out-{id}.wav")),
                show_plot: false,
                plot_path: dir.join(format!("taper-e2e-{id}.svg")),
                quantize: QuantizePolicy::Round,
            },
        }
    }

    fn run(&self, input: &AudioBuffer) -> AudioBuffer {
        write_wav(&self.config.input_path, input).expect("write input");
        run_with(&self.config, None).expect("pipeline run");
        read_wav(&self.config.output_path).expect("read output")
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        for p in [
            &self.config.input_path,
            &self.config.output_path,
            &self.config.plot_path,
        ] {
            let _ = std::fs::remove_file(p);
        }
    }
}

#[test]
fn five_mono_frames_at_8khz() {
    let scratch = Scratch::new("five");
    let input = AudioBuffer::new(8_000, Samples::I16(array![[1000], [1000], [1000], [1000], [1000]]));

    let output = scratch.run(&input);

    assert_eq!(output.sample_rate, 8_000);
    assert_eq!(output.format(), SampleFormat::I16);
    assert_eq!(
        output.samples(),
        &Samples::I16(array![[0], [500], [1000], [500], [0]])
    );
}

#[test]
fn five_mono_frames_truncated() {
    let mut scratch = Scratch::new("five-trunc");
    scratch.config.quantize = QuantizePolicy::Truncate;
    let input = AudioBuffer::new(8_000, Samples::I16(array![[1000], [1000], [1000], [1000], [1000]]));

    let output = scratch.run(&input);

    assert_eq!(
        output.samples(),
        &Samples::I16(array![[0], [499], [1000], [499], [0]])
    );
}

#[test]
fn single_frame_is_left_unchanged() {
    let scratch = Scratch::new("single");
    let input = AudioBuffer::new(22_050, Samples::I16(array![[-4321, 4321]]));

    let output = scratch.run(&input);

    assert_eq!(output, input);
}

#[test]
fn stereo_24bit_keeps_shape_and_format() {
    let scratch = Scratch::new("stereo24");
    let frames = 1_001;
    let input = AudioBuffer::new(
        44_100,
        Samples::I24(Array2::from_shape_fn((frames, 2), |(i, c)| {
            let v = ((i * 7919) % 16_000_000) as i32 - 8_000_000;
            if c == 0 {
                v
            } else {
                -v
            }
        })),
    );

    let output = scratch.run(&input);

    assert_eq!(output.sample_rate, 44_100);
    assert_eq!(output.format(), SampleFormat::I24);
    assert_eq!(output.frames(), frames);
    assert_eq!(output.channels(), 2);

    let Samples::I24(out) = output.samples() else {
        panic!("format changed");
    };
    assert_eq!(out[[0, 0]], 0);
    assert_eq!(out[[frames - 1, 1]], 0);
    for row in out.rows() {
        assert_eq!(row[0], -row[1]);
    }
    let Samples::I24(inp) = input.samples() else {
        unreachable!()
    };
    assert_eq!(out[[500, 0]], inp[[500, 0]]);
}

#[test]
fn silent_float_file_stays_silent() {
    let scratch = Scratch::new("silent");
    let input = AudioBuffer::new(48_000, Samples::F32(Array2::zeros((256, 1))));

    let output = scratch.run(&input);

    assert_eq!(output, input);
}

#[test]
fn missing_input_fails_before_writing() {
    let scratch = Scratch::new("missing");
    let err = run_with(&scratch.config, None).unwrap_err();

    assert!(matches!(err, TaperError::InputNotFound { .. }), "got {err:?}");
    assert!(!scratch.config.output_path.exists());
}

#[test]
fn unwritable_output_is_reported() {
    let mut scratch = Scratch::new("unwritable");
    let input = AudioBuffer::new(8_000, Samples::I16(array![[1], [2], [3]]));
    write_wav(&scratch.config.input_path, &input).unwrap();
    scratch.config.output_path = std::env::temp_dir()
        .join(format!("taper-missing-dir-{}", std::process::id()))
        .join("out.wav");

    let err = run_with(&scratch.config, None).unwrap_err();

    assert!(matches!(err, TaperError::WriteFailure { .. }), "got {err:?}");
}
