use std::fs;
use std::path::{Path, PathBuf};

use gleaner::error::Error;
use gleaner::filtering::SeedThresholds;
use gleaner::nlp::{Annotate, ReviewAnnotator};
use gleaner::phrase::WindowConfig;
use gleaner::pipelines::{Pipeline, ReviewScores, SeedVocab};

fn write_partition(root: &Path, relative: &str, lines: &[String]) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, lines.join("\n")).unwrap();
}

#[test_log::test]
fn seeds_no_folders() {
    let src = PathBuf::from("svdkjljlkmjlmdsfljkf");
    let dst = PathBuf::from("fzjoijzoecijzoiej");

    let pipeline = SeedVocab::new(
        src,
        dst,
        None,
        None,
        SeedThresholds::default(),
        WindowConfig::default(),
    );
    assert!(pipeline.run().is_err());
}

#[test_log::test]
fn reviews_no_folders() {
    let src = PathBuf::from("svdkjljlkmjlmdsfljkf");
    let dst = PathBuf::from("fzjoijzoecijzoiej");

    let pipeline = ReviewScores::new(src, dst, None);
    assert!(pipeline.run().is_err());
}

#[test_log::test]
fn archives_only_corpus_fails() {
    let corpus = tempfile::tempdir().unwrap();
    fs::write(corpus.path().join("stale.zip"), b"").unwrap();
    fs::write(corpus.path().join("older.rar"), b"").unwrap();

    let pipeline = SeedVocab::new(
        corpus.path().to_path_buf(),
        corpus.path().join("seeds.csv"),
        None,
        None,
        SeedThresholds::default(),
        WindowConfig::default(),
    );
    match pipeline.run() {
        Err(Error::EmptyCorpus(root)) => assert_eq!(root.as_path(), corpus.path()),
        other => panic!("expected an empty corpus error, got {other:?}"),
    }
}

#[test_log::test]
fn seeds_end_to_end() {
    let annotator = ReviewAnnotator::new();
    let calm = "The bed was comfortable.";
    let emphatic = "The bed was comfortable!!";
    let c_calm = annotator.compound(calm);
    let c_emphatic = annotator.compound(emphatic);

    let corpus = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    write_partition(
        corpus.path(),
        "city_one/grand_hotel.txt",
        &[
            format!("Jan 2 2019\tGreat stay\t{calm}"),
            format!("Jan 3 2019\tComfy\t{calm}"),
            "Jan 4 2019\tPillows\tThe pillow was great.".to_string(),
        ],
    );
    // blank and malformed lines are skipped, fields past the body dropped
    write_partition(
        corpus.path(),
        "city_two/budget_inn.txt",
        &[
            format!("Feb 1 2019\tGood bed\t{emphatic}"),
            String::new(),
            "not a review line".to_string(),
            format!("Feb 2 2019\tGood bed\t{emphatic}"),
            format!("Feb 3 2019\tGood bed\t{emphatic}\tattachment.jpg"),
        ],
    );

    let dst = out.path().join("seeds.csv");
    let by_source = out.path().join("seeds_by_source.csv");
    let pipeline = SeedVocab::new(
        corpus.path().to_path_buf(),
        dst.clone(),
        Some(by_source.clone()),
        None,
        SeedThresholds::default(),
        WindowConfig::default(),
    );
    let seeds = pipeline.run().unwrap();

    // "pillow great" occurs once and falls below the support floor; the two
    // partition averages merge weighted by their supports (2 and 3)
    let local_calm = (c_calm + c_calm) / 2.0;
    let local_emphatic = (c_emphatic + c_emphatic + c_emphatic) / 3.0;
    let merged = (local_emphatic * 3.0 + local_calm * 2.0) / 5.0;

    assert_eq!(seeds.len(), 1);
    assert_eq!(seeds[0].aspect, "comfort");
    assert_eq!(seeds[0].phrase, "bed comfortable");
    assert!((seeds[0].weight - merged).abs() < 1e-12);

    assert_eq!(
        fs::read_to_string(&dst).unwrap(),
        format!("feature_name,seed_phrase,weight\nComfort,bed comfortable,{merged:.4}\n")
    );
    assert_eq!(
        fs::read_to_string(&by_source).unwrap(),
        format!(
            "source,group,feature_name,seed_phrase,weight\n\
             Budget Inn,City Two,Comfort,bed comfortable,{local_emphatic:.4}\n\
             Grand Hotel,City One,Comfort,bed comfortable,{local_calm:.4}\n"
        )
    );
}

#[test_log::test]
fn thresholds_gate_support_and_magnitude() {
    let corpus = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    write_partition(
        corpus.path(),
        "plain_motel.txt",
        &[
            "Jan 2 2019\tFine\tThe room had a lamp.".to_string(),
            "Jan 3 2019\tFine\tThe room had a lamp.".to_string(),
            "Jan 4 2019\tPillows\tThe pillow was great.".to_string(),
        ],
    );

    // defaults: "room lamp" is supported but scores zero, "pillow great"
    // scores well but occurs once
    let strict = out.path().join("seeds_strict.csv");
    let pipeline = SeedVocab::new(
        corpus.path().to_path_buf(),
        strict.clone(),
        None,
        None,
        SeedThresholds::default(),
        WindowConfig::default(),
    );
    let seeds = pipeline.run().unwrap();
    assert!(seeds.is_empty());
    assert_eq!(
        fs::read_to_string(&strict).unwrap(),
        "feature_name,seed_phrase,weight\n"
    );

    // lowering the support floor admits the single positive phrase while the
    // magnitude floor still drops the zero-scored one
    let loose = out.path().join("seeds_loose.csv");
    let pipeline = SeedVocab::new(
        corpus.path().to_path_buf(),
        loose,
        None,
        None,
        SeedThresholds::with_limits(1, 1e-6),
        WindowConfig::default(),
    );
    let seeds = pipeline.run().unwrap();
    assert_eq!(seeds.len(), 1);
    assert_eq!(seeds[0].aspect, "comfort");
    assert_eq!(seeds[0].phrase, "pillow great");
    assert!(seeds[0].weight > 0.0);
}

#[test_log::test]
fn reviews_end_to_end() {
    let annotator = ReviewAnnotator::new();
    let mixed = "The bed was comfortable. The staff was rude.";
    let flat = "The room had a lamp.";

    let corpus = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    write_partition(
        corpus.path(),
        "city_one/grand_hotel.txt",
        &[
            format!("Jan 2 2019\tMixed feelings\t{mixed}"),
            format!("Jan 5 2019\tOk\t{flat}"),
        ],
    );

    let dst = out.path().join("reviews.csv");
    let pipeline = ReviewScores::new(corpus.path().to_path_buf(), dst.clone(), None);
    pipeline.run().unwrap();

    let compound = annotator.compound(mixed);
    let comfort = annotator.compound("The bed was comfortable.");
    let service = annotator.compound("The staff was rude.");

    let written = fs::read_to_string(&dst).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "source,group,date,subject,review,sentiment,compound,\
         cleanliness_score,cleanliness_label,comfort_score,comfort_label,\
         location_score,location_label,price_score,price_label,\
         service_score,service_label"
    );
    // one sentence per aspect here, so the aspect means equal the sentence
    // compounds; untouched aspects stay empty
    assert_eq!(
        lines[1],
        format!(
            "Grand Hotel,City One,Jan 2 2019,Mixed feelings,{mixed},negative,{compound:.4},\
             ,,{comfort:.4},positive,,,,,{service:.4},negative"
        )
    );
    assert_eq!(
        lines[2],
        format!("Grand Hotel,City One,Jan 5 2019,Ok,{flat},neutral,0.0000,,,0.0000,neutral,,,,,,")
    );
}
