use criterion::{Criterion, criterion_group, criterion_main};
use linden::{Error, MaybeExpr, Node::*, add, defexpr, mul, postvisit};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hint::black_box;

const SEED: u64 = 42;
const TERMS: usize = 256;

/// A dense random polynomial in x, built term by term.
fn random_polynomial(rng: &mut StdRng) -> MaybeExpr {
    let mut sum = defexpr!(c0);
    for degree in 1..TERMS {
        let coeff = linden::Expr::number(rng.random_range(-10.0..10.0));
        let term = mul(
            coeff,
            Ok(linden::Expr::symbol("x")?.pow(degree as f64)),
        );
        sum = add(sum, term);
    }
    sum
}

fn b_differentiate(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(SEED);
    let poly = random_polynomial(&mut rng).expect("cannot build polynomial");
    c.bench_function("differentiate-polynomial", |b| {
        b.iter(|| {
            black_box(
                black_box(&poly)
                    .differentiate("x")
                    .expect("cannot differentiate"),
            );
        })
    });
}

fn b_render(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(SEED);
    let deriv = random_polynomial(&mut rng)
        .and_then(|poly| poly.differentiate("x"))
        .expect("cannot differentiate");
    c.bench_function("render-derivative", |b| {
        b.iter(|| {
            black_box(format!("{}", black_box(&deriv)));
        })
    });
}

fn b_fold(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(SEED);
    let deriv = random_polynomial(&mut rng)
        .and_then(|poly| poly.differentiate("x"))
        .expect("cannot differentiate");
    c.bench_function("fold-derivative", |b| {
        b.iter(|| {
            let value = postvisit::<f64, Error, _>(
                black_box(&deriv),
                |node, operands| {
                    Ok(match node {
                        Number(value) => *value,
                        Symbol(_) => 1.5,
                        Binary(op, ..) => {
                            use linden::BinaryOp::*;
                            let (l, r) = (*operands[0], *operands[1]);
                            match op {
                                Add => l + r,
                                Sub => l - r,
                                Mul => l * r,
                                Div => l / r,
                                Pow => l.powf(r),
                            }
                        }
                    })
                },
            )
            .expect("cannot fold");
            black_box(value);
        })
    });
}

criterion_group!(bench, b_differentiate, b_render, b_fold);
criterion_main!(bench);
