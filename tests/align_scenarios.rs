use line_align::align::{strip_gaps, Aligner};
use line_align::distance::{levenshtein_all, Distance};
use line_align::model::file::MatrixDocument;
use line_align::model::SubstitutionModel;
use line_align::util::text;
use line_align::AlignError;

fn two_chars() -> SubstitutionModel {
    SubstitutionModel::from_pairs([(('a', 'a'), 0.0), (('a', 'b'), -1.0), (('b', 'b'), 0.0)])
        .with_gap_open(-1.0)
        .with_gap_extend(-1.0)
}

#[test]
fn equal_length_lines_need_no_gaps() {
    let model = SubstitutionModel::from_pairs([
        (('A', 'A'), 1.0),
        (('C', 'G'), 0.0),
        (('A', 'C'), 0.0),
        (('A', 'G'), 0.0),
        (('C', 'C'), 1.0),
        (('G', 'G'), 1.0),
    ])
    .with_gap_symbol('-');
    let aligned = Aligner::new(&model).align_strs(&["AC", "AG"]).unwrap();
    assert_eq!(aligned, vec!["AC", "AG"]);
}

#[test]
fn permissive_model_inserts_one_gap() {
    let model = SubstitutionModel::uniform("ABC".chars(), 1.0, -1.0)
        .with_gap_open(-1.0)
        .with_gap_extend(-1.0)
        .with_gap_symbol('-');
    let aligned = Aligner::new(&model).align_strs(&["ABC", "AC"]).unwrap();
    assert_eq!(aligned, vec!["ABC", "A-C"]);
}

#[test]
fn members_keep_input_order() {
    let aligned = Aligner::new(&two_chars()).align_strs(&["aa", "baa", "aab"]).unwrap();
    assert_eq!(aligned.len(), 3);
    let gap = two_chars().gap_symbol();
    for (orig, member) in ["aa", "baa", "aab"].iter().zip(&aligned) {
        let stripped = strip_gaps(&text::to_symbols(member), gap);
        assert_eq!(text::render(&stripped), *orig);
    }
    let width = aligned[0].chars().count();
    assert!(aligned.iter().all(|m| m.chars().count() == width));
}

#[test]
fn missing_score_fails_without_partial_result() {
    let model = two_chars();
    let result = Aligner::new(&model).align_strs(&["aa", "aa", "az"]);
    assert_eq!(
        result,
        Err(AlignError::MissingSubstitutionScore { first: 'a', second: 'z' })
    );
}

#[test]
fn missing_score_names_the_pair() {
    let model = two_chars();
    let err = Aligner::new(&model).align_strs(&["a", "c"]).unwrap_err();
    assert_eq!(err.pair(), ('a', 'c'));
    assert!(err.to_string().contains("'c'"));
}

#[test]
fn json_document_drives_alignment() {
    let doc = MatrixDocument::from_json_str(
        r#"{"gap_open": -1.0, "gap_extend": -1.0, "gap_symbol": "_", "substitutions": {"aa": 0.0, "ba": -1.0, "bb": 0.0}}"#,
    )
    .unwrap();
    let model = doc.into_model().unwrap();
    let aligned = Aligner::new(&model).align_strs(&["baa", "aa"]).unwrap();
    assert_eq!(aligned, vec!["baa", "_aa"]);
}

#[test]
fn ranking_can_choose_merge_order() {
    let lines = ["aab", "bbb", "aaa"];
    let seqs: Vec<Vec<char>> = lines.iter().map(|l| text::to_symbols(l)).collect();
    let ranking = levenshtein_all(&seqs);
    assert_eq!(
        ranking[0],
        Distance { distance: 1, index_a: 0, index_b: 2 }
    );

    // caller-side ordering: closest pair first, then the rest
    let first = &ranking[0];
    let mut order = vec![first.index_a, first.index_b];
    let rest: Vec<usize> = (0..lines.len()).filter(|i| !order.contains(i)).collect();
    order.extend(rest);
    let ordered: Vec<&str> = order.iter().map(|&i| lines[i]).collect();

    let aligned = Aligner::new(&two_chars()).align_strs(&ordered).unwrap();
    assert_eq!(aligned, vec!["aab", "aaa", "bbb"]);
}

fn affine() -> SubstitutionModel {
    SubstitutionModel::uniform("abc".chars(), 1.0, -1.0)
        .with_gap_open(-3.0)
        .with_gap_extend(-0.5)
        .with_gap_symbol('-')
}

#[test]
fn one_gap_run_beats_two_separate_gaps() {
    let model = affine();
    let aligner = Aligner::new(&model);
    // b-- scores -1 - 3.5, -b- scores 1 - 6
    assert_eq!(aligner.align_strs(&["aba", "b"]).unwrap(), vec!["aba", "b--"]);
    assert_eq!(aligner.align_strs(&["abcabc", "abc"]).unwrap(), vec!["abcabc", "abc---"]);
}

#[test]
fn linear_gaps_split_the_same_run() {
    let linear = affine().with_gap_open(-1.75).with_gap_extend(-1.75);
    let aligned = Aligner::new(&linear).align_strs(&["aba", "b"]).unwrap();
    assert_eq!(aligned, vec!["aba", "-b-"]);
}

#[test]
fn gap_in_block_is_placed_before_gap_in_sequence() {
    let model = SubstitutionModel::from_pairs([(('a', 'a'), 0.0), (('a', 'b'), -10.0), (('b', 'b'), 0.0)])
        .with_gap_open(-1.0)
        .with_gap_extend(-1.0);
    let aligned = Aligner::new(&model).align_strs(&["a", "b"]).unwrap();
    assert_eq!(aligned, vec!["a⋄", "⋄b"]);
}
