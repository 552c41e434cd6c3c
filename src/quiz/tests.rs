use super::*;
use crate::error::Error;
use crate::song::Song;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn s(title: &str, body: &str) -> Song {
    Song {
        title: title.into(),
        artist: format!("{title} artist"),
        source_url: format!("https://example.com/{title}"),
        text_body: body.into(),
    }
}

#[test]
fn excerpt_starts_at_zero_or_one_for_ten_char_body() {
    let songs = vec![s("Song A", "漢字テスト文字列です")];
    let mut seen_first = false;
    let mut seen_second = false;

    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let q = select_question(&songs, DEFAULT_EXCERPT_LEN, &mut rng).unwrap();
        assert_eq!(q.excerpt.chars().count(), 8);
        match q.excerpt.as_str() {
            "漢字テスト文字列" => seen_first = true,
            "字テスト文字列で" => seen_second = true,
            other => panic!("unexpected excerpt {other}"),
        }
    }

    assert!(seen_first && seen_second);
}

#[test]
fn excerpt_has_exact_length_and_target_is_from_input() {
    let songs = vec![
        s("one", "一二三四五六七八九十百千万"),
        s("two", "春夏秋冬東西南北上下左右前後"),
        s("three", "山川海空雲雨雪風花鳥月星"),
    ];
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..100 {
        let q = select_question(&songs, 5, &mut rng).unwrap();
        assert_eq!(q.excerpt.chars().count(), 5);
        assert!(songs.contains(&q.target));
        assert!(q.target.text_body.contains(&q.excerpt));
    }
}

#[test]
fn every_song_can_be_picked() {
    let songs = vec![s("a", "一二三四五六七八九"), s("b", "一二三四五六七八九"), s("c", "一二三四五六七八九")];
    let mut rng = StdRng::seed_from_u64(42);
    let mut picked = std::collections::HashSet::new();

    for _ in 0..200 {
        let q = select_question(&songs, DEFAULT_EXCERPT_LEN, &mut rng).unwrap();
        picked.insert(q.target.title);
    }

    assert_eq!(picked.len(), 3);
}

#[test]
fn selection_does_not_mutate_input() {
    let songs = vec![s("a", "一二三四五六七八九十"), s("b", "春夏秋冬東西南北上下")];
    let before = songs.clone();
    let mut rng = StdRng::seed_from_u64(1);

    for _ in 0..20 {
        select_question(&songs, DEFAULT_EXCERPT_LEN, &mut rng).unwrap();
    }

    assert_eq!(songs, before);
}

#[test]
fn empty_song_list_fails_fast() {
    let mut rng = StdRng::seed_from_u64(0);
    let err = select_question(&[], DEFAULT_EXCERPT_LEN, &mut rng).unwrap_err();
    assert!(matches!(err, Error::NoSongs));
}

#[test]
fn zero_excerpt_length_is_rejected() {
    let songs = vec![s("a", "一二三")];
    let mut rng = StdRng::seed_from_u64(0);
    let err = select_question(&songs, 0, &mut rng).unwrap_err();
    assert!(matches!(err, Error::InvalidExcerptLength));
}

#[test]
fn short_body_is_shown_whole() {
    let songs = vec![s("short", "東京")];
    let mut rng = StdRng::seed_from_u64(3);

    let q = select_question(&songs, DEFAULT_EXCERPT_LEN, &mut rng).unwrap();
    assert_eq!(q.excerpt, "東京");
}

#[test]
fn body_of_exact_excerpt_length_is_shown_whole() {
    let songs = vec![s("exact", "一二三四五六七八")];
    let mut rng = StdRng::seed_from_u64(3);

    let q = select_question(&songs, DEFAULT_EXCERPT_LEN, &mut rng).unwrap();
    assert_eq!(q.excerpt, "一二三四五六七八");
}

#[test]
fn question_at_pins_the_window() {
    let song = s("pinned", "漢字テスト文字列です");

    assert_eq!(Question::at(&song, 0, 8).excerpt, "漢字テスト文字列");
    assert_eq!(Question::at(&song, 1, 8).excerpt, "字テスト文字列で");
    assert_eq!(Question::at(&song, 2, 8).excerpt, "テスト文字列です");
    assert_eq!(Question::at(&song, 1, 8).target, song);
}

#[test]
fn question_at_clamps_offset_past_the_end() {
    let song = s("pinned", "漢字テスト文字列です");

    assert_eq!(Question::at(&song, 9, 8).excerpt, "テスト文字列です");
    assert_eq!(Question::at(&song, 3, 20).excerpt, "漢字テスト文字列です");
}

#[test]
fn characters_outside_the_bmp_count_as_one() {
    let song = s("astral", "𠮷野家𩸽定食𠀋一二三");
    assert_eq!(song.body_len(), 10);
    assert_eq!(Question::at(&song, 0, 2).excerpt, "𠮷野");
    assert_eq!(Question::at(&song, 3, 3).excerpt, "𩸽定食");

    let songs = vec![song];
    let mut rng = StdRng::seed_from_u64(8);
    for _ in 0..50 {
        let q = select_question(&songs, DEFAULT_EXCERPT_LEN, &mut rng).unwrap();
        assert_eq!(q.excerpt.chars().count(), 8);
        assert!(q.excerpt == "𠮷野家𩸽定食𠀋一" || q.excerpt == "野家𩸽定食𠀋一二");
    }
}
