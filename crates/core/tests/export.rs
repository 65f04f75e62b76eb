use ytchapters_core::{VideoId, format_chapters_export, parse_chapter_lines, write_export};

#[tokio::test]
async fn writes_export_text_under_deterministic_name() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("nested").join("downloads");
    let video_id = VideoId::new("dQw4w9WgXcQ").unwrap();

    let parsed = parse_chapter_lines("0:00 - 1:30 Intro\n1:30 - 1:02:03 Deep dive\nnoise");
    let text = format_chapters_export(&parsed.chapters);

    let path = write_export(&out_dir, &video_id, &text).await.unwrap();

    assert_eq!(path, out_dir.join("yt_chapters_dQw4w9WgXcQ.txt"));
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, "0:00 - Intro\n1:30 - Deep dive");
}

#[tokio::test]
async fn overwrites_a_previous_export() {
    let dir = tempfile::tempdir().unwrap();
    let video_id = VideoId::new("dQw4w9WgXcQ").unwrap();

    write_export(dir.path(), &video_id, "old").await.unwrap();
    let path = write_export(dir.path(), &video_id, "0:00 - New")
        .await
        .unwrap();

    assert_eq!(std::fs::read_to_string(path).unwrap(), "0:00 - New");
}
