use criterion::{black_box, criterion_group, criterion_main, Criterion};

use flashword_core::model::WordEntry;
use flashword_core::{Catalog, Game, MemoryStore, SessionStore};

fn populated_session(users: usize) -> SessionStore<MemoryStore> {
    let mut session = SessionStore::new(MemoryStore::new());
    for i in 0..users {
        session.login(&format!("Learner{i}")).unwrap();
    }
    session.logout().unwrap();
    session
}

fn bench_accepts(c: &mut Criterion) {
    let mut group = c.benchmark_group("accepts");
    let word = WordEntry::new("תודה", "Thank you", "Greetings");

    group.bench_function("exact", |b| b.iter(|| word.accepts(black_box("Thank you"))));

    group.bench_function("padded_mixed_case", |b| {
        b.iter(|| word.accepts(black_box("   tHaNk YoU   ")))
    });

    group.bench_function("miss", |b| b.iter(|| word.accepts(black_box("thanks"))));

    group.finish();
}

fn bench_login(c: &mut Criterion) {
    let mut group = c.benchmark_group("login");

    for users in [10, 1000] {
        group.bench_function(format!("returning,users={users}"), |b| {
            let mut session = populated_session(users);
            b.iter(|| session.login(black_box("learner7")).unwrap())
        });
    }

    group.finish();
}

fn bench_turn(c: &mut Criterion) {
    let mut group = c.benchmark_group("turn");

    group.bench_function("answer_and_advance", |b| {
        let mut game = Game::new(populated_session(100), Catalog::builtin());
        game.login("Learner0").unwrap();
        b.iter(|| {
            let target = game.current_word().map(|w| w.target.clone()).unwrap();
            game.check_answer(black_box(&target)).unwrap();
            game.advance().unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_accepts, bench_login, bench_turn);
criterion_main!(benches);
