use super::types::{SchedError, Score, ScoringOptions, ShiftCounts};
use crate::model::{Assignment, Day, DaySchedule, ShiftCode, WorkerId};

/// Toutes les permutations de `items`, en prenant récursivement chaque élément restant
/// dans l'ordre croissant des index. Cet ordre départage les égalités de score.
pub fn enumerate_orderings<T: Copy>(items: &[T]) -> Vec<Vec<T>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }

    let mut out = Vec::new();
    for (idx, head) in items.iter().enumerate() {
        let rest: Vec<T> = items
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != idx)
            .map(|(_, item)| *item)
            .collect();
        for mut tail in enumerate_orderings(&rest) {
            tail.insert(0, *head);
            out.push(tail);
        }
    }
    out
}

/// Score d'un ordre : `ordering[i]` prend `ShiftCode::ALL[i]`.
///
/// Somme des compteurs avant affectation, plus `poids × (max - min)` des compteurs
/// de chaque candidat.
pub fn score_ordering(
    counts: &ShiftCounts,
    ordering: &[WorkerId],
    opts: ScoringOptions,
) -> Score {
    let tenths: u64 = ordering
        .iter()
        .zip(ShiftCode::ALL)
        .map(|(worker, shift)| {
            let base = u64::from(counts.get(*worker, shift)) * 10;
            let penalty =
                u64::from(opts.imbalance_weight_tenths) * u64::from(counts.spread(*worker));
            base + penalty
        })
        .sum();
    Score::from_tenths(tenths)
}

/// Ordre au score strictement minimal ; le premier énuméré gagne en cas d'égalité.
pub fn best_ordering(
    counts: &ShiftCounts,
    candidates: &[WorkerId],
    opts: ScoringOptions,
) -> Option<(Vec<WorkerId>, Score)> {
    let mut best: Option<(Vec<WorkerId>, Score)> = None;
    for ordering in enumerate_orderings(candidates) {
        let score = score_ordering(counts, &ordering, opts);
        let better = best.as_ref().map_or(true, |(_, current)| score < *current);
        if better {
            best = Some((ordering, score));
        }
    }
    best
}

/// Affecte les trois agents présents aux postes du jour puis met à jour les compteurs.
pub fn assign_day(
    counts: &mut ShiftCounts,
    day: Day,
    week_index: usize,
    off: WorkerId,
    opts: ScoringOptions,
) -> Result<DaySchedule, SchedError> {
    let candidates: Vec<WorkerId> = WorkerId::ALL.into_iter().filter(|w| *w != off).collect();

    let Some((ordering, _score)) = best_ordering(counts, &candidates, opts) else {
        return Err(SchedError::RotationGap { day: day.date });
    };
    let &[first, second, third] = ordering.as_slice() else {
        return Err(SchedError::InvalidInput(format!(
            "day {}: expected 3 workers on duty, got {}",
            day.date,
            ordering.len()
        )));
    };

    let assignments = [
        Assignment {
            worker: first,
            shift: ShiftCode::Early,
        },
        Assignment {
            worker: second,
            shift: ShiftCode::Mid,
        },
        Assignment {
            worker: third,
            shift: ShiftCode::Late,
        },
    ];

    for a in &assignments {
        counts.increment(a.worker, a.shift);
    }

    #[cfg(feature = "logging")]
    tracing::debug!(
        day = day.date,
        off = %off,
        early = %first,
        mid = %second,
        late = %third,
        score = %_score,
        "day assigned"
    );

    Ok(DaySchedule {
        day,
        week_index,
        off,
        assignments,
    })
}
