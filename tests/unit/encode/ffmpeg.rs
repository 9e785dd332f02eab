use super::*;

#[test]
fn partial_path_keeps_directory_and_extension() {
    let out = Path::new("/videos/squats/squats_v1_1080x1080.mp4");
    assert_eq!(
        partial_path(out),
        PathBuf::from("/videos/squats/squats_v1_1080x1080.partial.mp4")
    );
}

#[test]
fn partial_path_without_extension() {
    assert_eq!(
        partial_path(Path::new("out/clip")),
        PathBuf::from("out/clip.partial")
    );
}

#[test]
fn begin_rejects_odd_dimensions() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("target/unit_ffmpeg/odd.mp4"));
    let err = sink
        .begin(SinkConfig {
            width: 1081,
            height: 1080,
            fps: Fps::integer(30).unwrap(),
        })
        .unwrap_err();
    assert!(matches!(err, RepcueError::Validation(_)));
}

#[test]
fn push_before_begin_is_an_engine_error() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("target/unit_ffmpeg/unstarted.mp4"));
    let frame = FrameRGBA::filled(2, 2, [0, 0, 0, 255]);
    assert!(matches!(
        sink.push_frame(FrameIndex(1), &frame),
        Err(RepcueError::RenderEngine(_))
    ));
}

#[test]
fn end_before_begin_is_an_engine_error() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("target/unit_ffmpeg/unended.mp4"));
    assert!(sink.end().is_err());
}

fn x264_available() -> bool {
    is_ffmpeg_on_path()
        && Command::new("ffmpeg")
            .args(["-hide_banner", "-encoders"])
            .output()
            .map(|o| String::from_utf8_lossy(&o.stdout).contains("libx264"))
            .unwrap_or(false)
}

fn scratch_out(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_ffmpeg").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir.join("clip_v1_16x16.mp4")
}

fn small_config() -> SinkConfig {
    SinkConfig {
        width: 16,
        height: 16,
        fps: Fps::integer(30).unwrap(),
    }
}

#[test]
fn dropping_mid_render_leaves_no_files() {
    if !x264_available() {
        return;
    }
    let out = scratch_out("dropped");
    let partial = partial_path(&out);

    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(&out));
    sink.begin(small_config()).unwrap();
    sink.push_frame(FrameIndex(1), &FrameRGBA::filled(16, 16, [40, 80, 120, 255]))
        .unwrap();
    drop(sink);

    assert!(!partial.exists());
    assert!(!out.exists());
}

#[test]
fn rejected_frame_then_drop_removes_partial() {
    if !x264_available() {
        return;
    }
    let out = scratch_out("wrong_size");
    let partial = partial_path(&out);

    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(&out));
    sink.begin(small_config()).unwrap();
    let err = sink
        .push_frame(FrameIndex(1), &FrameRGBA::filled(8, 8, [0, 0, 0, 255]))
        .unwrap_err();
    assert!(matches!(err, RepcueError::Validation(_)));
    drop(sink);

    assert!(!partial.exists());
    assert!(!out.exists());
}

#[test]
fn failed_encode_removes_partial() {
    if !x264_available() {
        return;
    }
    let out = scratch_out("failed");
    let partial = partial_path(&out);

    let mut sink = FfmpegSink::new(FfmpegSinkOpts {
        preset: "no-such-preset".to_string(),
        ..FfmpegSinkOpts::new(&out)
    });
    sink.begin(small_config()).unwrap();
    let frame = FrameRGBA::filled(16, 16, [0, 0, 0, 255]);
    for i in 1..=3 {
        if sink.push_frame(FrameIndex(i), &frame).is_err() {
            break;
        }
    }
    assert!(sink.end().is_err());
    drop(sink);

    assert!(!partial.exists());
    assert!(!out.exists());
}

#[test]
fn successful_end_moves_partial_into_place() {
    if !x264_available() {
        return;
    }
    let out = scratch_out("finished");
    let partial = partial_path(&out);

    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(&out));
    sink.begin(small_config()).unwrap();
    for i in 1..=6 {
        let shade = (i * 40) as u8;
        sink.push_frame(FrameIndex(i), &FrameRGBA::filled(16, 16, [shade, shade, shade, 255]))
            .unwrap();
    }
    sink.end().unwrap();

    assert!(out.is_file());
    assert!(std::fs::metadata(&out).unwrap().len() > 0);
    assert!(!partial.exists());
}
