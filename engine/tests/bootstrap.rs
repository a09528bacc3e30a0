use std::{io::Write, sync::Arc};

use chess::{Bitboard, File, Move, MoveFlag, Rank, Square};
use engine::{Engine, EngineConfig, EngineError, EngineTables, search::TTBound};
use nnue::{NetworkError, params::FILE_SIZE};
use tempfile::NamedTempFile;

fn network_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&vec![0u8; FILE_SIZE]).unwrap();
    file.flush().unwrap();
    file
}

fn bootstrap(file: &NamedTempFile) -> Engine {
    Engine::bootstrap(EngineConfig {
        hash_mb: 1,
        network_path: file.path().to_path_buf(),
        ..Default::default()
    })
    .unwrap()
}

#[test]
fn test_rook_on_empty_board() {
    let file = network_file();
    let engine = bootstrap(&file);

    let attacks = engine.tables().attacks().rook_attacks(Square::D4, Bitboard::EMPTY);
    assert_eq!(attacks, (Rank::Rank4.bb() | File::FileD.bb()) & !Square::D4.bb());
}

#[test]
fn test_rook_blocked_directly_north() {
    let file = network_file();
    let engine = bootstrap(&file);

    let attacks = engine.tables().attacks().rook_attacks(Square::D4, Square::D5.bb());
    let file_d = attacks & File::FileD.bb();

    assert_eq!(file_d, Bitboard::from([Square::D1, Square::D2, Square::D3, Square::D5]));
}

#[test]
fn test_between_two_rooks() {
    let file = network_file();
    let engine = bootstrap(&file);

    assert_eq!(
        engine.tables().between().between(Square::A6, Square::F6),
        Bitboard::from([Square::B6, Square::C6, Square::D6, Square::E6])
    );
}

#[test]
fn test_double_reset_is_idempotent() {
    let file = network_file();
    let mut engine = bootstrap(&file);
    let nf3 = Move::new(Square::G1, Square::F3, MoveFlag::Quiet);

    let td = engine.main_thread_mut();
    td.pv.update(0, nf3);
    td.stats.counter_moves.update(nf3, nf3);
    td.info.inc_nodes();
    let key = td.board.key();
    td.board.push_played(key);

    engine.reset_new_game();
    let first = engine.main_thread().clone();

    engine.reset_new_game();
    let second = engine.main_thread();

    assert_eq!(first.board, second.board);
    assert_eq!(first.stats, second.stats);
    assert_eq!(first.pv, second.pv);
    assert_eq!(first.info.nodes(), second.info.nodes());
    assert_eq!(first.info.seldepth(), second.info.seldepth());
    assert_eq!(first.info.stopped(), second.info.stopped());
    assert_eq!(engine.tt().hashfull(), 0);
}

#[test]
fn test_reset_leaves_tables_untouched() {
    let file = network_file();
    let mut engine = bootstrap(&file);
    let before = Arc::clone(engine.tables());

    let key = engine.main_thread().board.key();
    engine.tt().store(key, 3, TTBound::Lower, Move::NONE, 50);
    engine.reset_new_game();

    assert!(Arc::ptr_eq(&before, engine.tables()));
    assert!(**engine.tables() == EngineTables::build(engine.config().zobrist_seed));

    let td = engine.main_thread();
    assert!(td.pv.lengths().iter().all(|&len| len == 0));
    assert!(td.pv.moves().all(|m| *m == Move::NONE));
    assert_eq!(td.info.nodes(), 0);
    assert!(td.board.played_positions().is_empty());
    assert_eq!(engine.tt().probe(key), None);
}

#[test]
fn test_same_seed_same_fingerprints() {
    let file = network_file();
    let a = bootstrap(&file);
    let b = bootstrap(&file);

    assert_eq!(a.main_thread().board.key(), b.main_thread().board.key());
}

#[test]
fn test_missing_network_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let result = Engine::bootstrap(EngineConfig {
        hash_mb: 1,
        network_path: dir.path().join("nn.net"),
        ..Default::default()
    });

    assert!(matches!(result, Err(EngineError::Network(NetworkError::Io { .. }))));
}

#[test]
fn test_malformed_network_is_fatal() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"not a network").unwrap();

    let result = Engine::bootstrap(EngineConfig {
        hash_mb: 1,
        network_path: file.path().to_path_buf(),
        ..Default::default()
    });

    assert!(matches!(
        result,
        Err(EngineError::Network(NetworkError::Size { found: 13, .. }))
    ));
}
