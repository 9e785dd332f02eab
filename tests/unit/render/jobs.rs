use super::*;

fn id(s: &str) -> ExerciseId {
    ExerciseId::new(s).unwrap()
}

#[test]
fn expands_to_three_jobs_in_fixed_order() {
    let jobs = expand(&id("squats"), Path::new("/videos"));
    let resolutions: Vec<(u32, u32)> = jobs.iter().map(|j| j.aspect.resolution()).collect();
    assert_eq!(resolutions, vec![(1080, 1080), (1080, 1920), (1920, 1080)]);
    assert!(jobs.iter().all(|j| j.exercise_id == id("squats")));
}

#[test]
fn output_paths_follow_the_naming_scheme() {
    let jobs = expand(&id("squats"), Path::new("/videos"));
    let paths: Vec<PathBuf> = jobs.iter().map(|j| j.output_path.clone()).collect();
    assert_eq!(
        paths,
        vec![
            PathBuf::from("/videos/squats/squats_v1_1080x1080.mp4"),
            PathBuf::from("/videos/squats/squats_v1_1080x1920.mp4"),
            PathBuf::from("/videos/squats/squats_v1_1920x1080.mp4"),
        ]
    );
}

#[test]
fn expansion_is_deterministic() {
    let root = Path::new("out");
    assert_eq!(expand(&id("plank"), root), expand(&id("plank"), root));
}

#[test]
fn id_content_does_not_change_job_shape() {
    for raw in ["a", "side-plank", "x_v1_1080x1080", "UPPER case"] {
        let jobs = expand(&id(raw), Path::new("out"));
        assert_eq!(jobs.len(), 3);
        assert_eq!(jobs.map(|j| j.aspect), AspectProfile::ALL);
    }
}

#[test]
fn aspect_display_names_resolution() {
    assert_eq!(AspectProfile::Portrait.to_string(), "portrait (1080x1920)");
}

#[test]
fn parses_aspect_and_container_names() {
    assert_eq!("Landscape".parse::<AspectProfile>().unwrap(), AspectProfile::Landscape);
    assert!("widescreen".parse::<AspectProfile>().is_err());
    assert_eq!("MP4".parse::<ContainerFormat>().unwrap(), ContainerFormat::Mp4);
    assert!("mkv".parse::<ContainerFormat>().is_err());
}
