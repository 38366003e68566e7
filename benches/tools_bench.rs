use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mysqldump_to_csv::tools::{is_insert_line, values_sanity_check};

/// Benchmark: is_insert_line 函数
fn bench_is_insert_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_insert_line");

    let insert = b"INSERT INTO `users` VALUES (1,'alice'),(2,'bob');";
    group.bench_function("insert", |b| b.iter(|| is_insert_line(black_box(insert))));

    let comment = b"-- Dumping data for table `users`";
    group.bench_function("comment", |b| b.iter(|| is_insert_line(black_box(comment))));

    let lower = b"insert into `users` VALUES (1);";
    group.bench_function("lowercase", |b| b.iter(|| is_insert_line(black_box(lower))));

    // 混合行批量判断
    let lines: [&[u8]; 8] = [
        b"-- MySQL dump 10.13",
        b"DROP TABLE IF EXISTS `users`;",
        b"CREATE TABLE `users` (",
        b"  `id` int NOT NULL,",
        b") ENGINE=InnoDB;",
        b"LOCK TABLES `users` WRITE;",
        b"INSERT INTO `users` VALUES (1,'alice');",
        b"UNLOCK TABLES;",
    ];
    group.bench_function("mixed_batch", |b| {
        b.iter(|| {
            lines
                .iter()
                .filter(|line| is_insert_line(black_box(line)))
                .count()
        })
    });

    group.finish();
}

/// Benchmark: values_sanity_check 函数
fn bench_values_sanity_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("values_sanity_check");

    group.bench_function("valid", |b| {
        b.iter(|| values_sanity_check(black_box(b"(1,'a');")))
    });
    group.bench_function("empty", |b| b.iter(|| values_sanity_check(black_box(b""))));

    group.finish();
}

criterion_group!(benches, bench_is_insert_line, bench_values_sanity_check);

criterion_main!(benches);
