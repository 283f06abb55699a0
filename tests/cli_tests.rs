use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// chunkrm running in an empty directory with no user config in reach
fn chunkrm(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("chunkrm").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .env_remove("RUST_LOG");
    for key in [
        "CHUNKRM_FFMPEG",
        "CHUNKRM_VIDEO_CODEC",
        "CHUNKRM_AUDIO_CODEC",
        "CHUNKRM_LOG_LEVEL",
        "CHUNKRM_LOG_FORMAT",
    ] {
        cmd.env_remove(key);
    }
    cmd
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn touch(path: &Path) {
    std::fs::write(path, b"not really a video").unwrap();
}

#[test]
fn test_plan_prints_graph_and_command() {
    let dir = TempDir::new().unwrap();
    let output = chunkrm(&dir)
        .args(["plan", "--input", "talk.mp4", "--remove", "00:10-00:20"])
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("[00:00:10.000, 00:00:20.000)"), "{stdout}");
    assert!(stdout.contains("[0:v]trim=start=0.000:end=10.000,setpts=PTS-STARTPTS[v0]"));
    assert!(stdout.contains("[a0][a1]concat=n=2:v=0:a=1[outa]"));
    assert!(stdout.contains("ffmpeg -i talk.mp4 -filter_complex"));
    assert!(stdout.contains("-c:v libx264 -c:a aac -y talk_cut.mp4"));
}

#[test]
fn test_plan_json_document() {
    let dir = TempDir::new().unwrap();
    let output = chunkrm(&dir)
        .args([
            "--video-codec",
            "libx265",
            "plan",
            "--input",
            "talk.mp4",
            "--output",
            "short.mkv",
            "--remove",
            "00:00:00-00:00:05",
            "--json",
        ])
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", stderr_of(&output));
    let document: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(document["program"], "ffmpeg");
    assert_eq!(document["removed"][0]["start"], 0.0);
    assert_eq!(document["removed"][0]["end"], 5.0);

    let plan = &document["plan"];
    assert_eq!(plan["output_path"], "short.mkv");
    assert_eq!(plan["segments"].as_array().unwrap().len(), 1);
    assert_eq!(plan["segments"][0]["start"], 5.0);
    assert!(plan["segments"][0]["end"].is_null());

    let args: Vec<&str> = plan["args"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a.as_str().unwrap())
        .collect();
    assert_eq!(args.len(), 14);
    assert_eq!(args[9], "libx265");
    assert_eq!(args[13], "short.mkv");
}

#[test]
fn test_plan_reads_cut_list_and_config_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("cuts.yaml"),
        concat!(
            "remove:\n",
            "  - start: \"01:00\"\n",
            "    end: \"01:30\"\n",
            "  - start: \"00:10\"\n",
            "    end: \"00:20\"\n",
        ),
    )
    .unwrap();
    std::fs::write(
        dir.path().join("chunkrm.toml"),
        "[chunkrm]\naudio_codec = \"libopus\"\noutput_extension = \"mkv\"\n",
    )
    .unwrap();

    let output = chunkrm(&dir)
        .args(["plan", "--input", "talk.mp4", "--cut-list", "cuts.yaml"])
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("[v0][v1][v2]concat=n=3:v=1:a=0[outv]"), "{stdout}");
    assert!(stdout.contains("-c:a libopus -y talk_cut.mkv"), "{stdout}");
}

#[test]
fn test_overlapping_chunks_fail() {
    let dir = TempDir::new().unwrap();
    chunkrm(&dir)
        .args([
            "plan",
            "--input",
            "talk.mp4",
            "--remove",
            "00:05-00:15",
            "--remove",
            "00:10-00:20",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("overlaps"));
}

#[test]
fn test_empty_range_fails() {
    let dir = TempDir::new().unwrap();
    chunkrm(&dir)
        .args(["plan", "--input", "talk.mp4", "--remove", "00:05-00:05"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be before end"));
}

#[test]
fn test_malformed_time_fails() {
    let dir = TempDir::new().unwrap();
    chunkrm(&dir)
        .args(["plan", "--input", "talk.mp4", "--remove", "00:aa-00:20"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid time '00:aa'"));
}

#[test]
fn test_plan_without_chunks_fails() {
    let dir = TempDir::new().unwrap();
    chunkrm(&dir)
        .args(["plan", "--input", "talk.mp4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No chunks to remove"));
}

#[test]
fn test_cut_requires_existing_input() {
    let dir = TempDir::new().unwrap();
    chunkrm(&dir)
        .args(["cut", "--input", "missing.mp4", "--remove", "00:10-00:20"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[cfg(unix)]
#[test]
fn test_cut_reports_transcoder_success_and_failure() {
    let dir = TempDir::new().unwrap();
    touch(&dir.path().join("talk.mp4"));

    chunkrm(&dir)
        .args(["--ffmpeg", "true", "cut", "--input", "talk.mp4", "--remove", "00:10-00:20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote talk_cut.mp4"));

    chunkrm(&dir)
        .args(["--ffmpeg", "false", "cut", "--input", "talk.mp4", "--remove", "00:10-00:20"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Transcoder failed"));
}

#[test]
fn test_edit_session_from_stdin() {
    let dir = TempDir::new().unwrap();
    touch(&dir.path().join("talk.mp4"));

    let output = chunkrm(&dir)
        .args(["edit", "--input", "talk.mp4"])
        .write_stdin(
            "add 00:10 00:20\n\
             add 00:15 00:25\n\
             add 00:40 00:50\n\
             remove #0\n\
             list\n\
             plan\n\
             quit\n",
        )
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("added #0 [00:00:10.000, 00:00:20.000)"), "{stdout}");
    assert!(stdout.contains("error: "), "{stdout}");
    assert!(stdout.contains("removed #0"), "{stdout}");
    assert!(stdout.contains("#1"), "{stdout}");
    assert!(stdout.contains("[0:v]trim=start=50.000,setpts=PTS-STARTPTS[v1]"), "{stdout}");
}

#[test]
fn test_failure_is_reported_once() {
    let dir = TempDir::new().unwrap();
    let output = chunkrm(&dir)
        .args(["plan", "--input", "talk.mp4"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert_eq!(stderr_of(&output).matches("No chunks to remove").count(), 1);
}

#[test]
fn test_dash_output_is_not_an_option() {
    let dir = TempDir::new().unwrap();
    chunkrm(&dir)
        .args(["plan", "--input", "talk.mp4", "--output=-out.mp4", "--remove", "00:10-00:20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-y ./-out.mp4"));
}

#[test]
fn test_edit_session_survives_huge_seconds() {
    let dir = TempDir::new().unwrap();
    touch(&dir.path().join("talk.mp4"));
    let script = format!("add 00:00 00:{}\nadd 00:10 00:20\nlist\nquit\n", "9".repeat(400));

    let output = chunkrm(&dir)
        .args(["edit", "--input", "talk.mp4"])
        .write_stdin(script)
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("error: Invalid time"), "{stdout}");
    assert!(stdout.contains("added #0 [00:00:10.000, 00:00:20.000)"), "{stdout}");
}
