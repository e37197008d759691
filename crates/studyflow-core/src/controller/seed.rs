//! Demo tasks shown on first launch.

use chrono::{DateTime, Duration, Utc};

use crate::domain::{Task, TimeEstimate};

pub fn demo_tasks(now: DateTime<Utc>) -> Vec<Task> {
    let today = now.date_naive();
    let tomorrow = today + Duration::days(1);
    let day_after = today + Duration::days(2);

    let rows = [
        ("d1", "Math", "Chapter 5: Derivatives & Integration", today, TimeEstimate::Hour1),
        ("d2", "CS", "Binary Search Trees Practice", today, TimeEstimate::Min45),
        ("d3", "English", "Essay Draft: Modern Literature", today, TimeEstimate::Hour1Half),
        ("d4", "Science", "Lab Report: Chemical Reactions", tomorrow, TimeEstimate::Hour1),
        ("d5", "History", "Review: World War II Timeline", day_after, TimeEstimate::Min30),
        ("d6", "Art", "Sketch: Perspective Drawing", tomorrow, TimeEstimate::Min45),
    ];

    let mut tasks: Vec<Task> = rows
        .into_iter()
        .map(|(id, subject, title, date, time)| {
            Task::new(id.to_string(), subject.to_string(), title.to_string(), date, time, now)
        })
        .collect();

    // One finished an hour ago so the progress card is not empty
    if let Some(done) = tasks.iter_mut().find(|t| t.id == "d2") {
        done.completed = true;
        done.completed_at = Some((now - Duration::hours(1)).timestamp_millis());
    }
    tasks
}
