//! Tracker view derivation
//!
//! Partitions tasks into overdue/today/upcoming/completed sections and
//! computes today's progress banner and study-time totals.

use chrono::NaiveDate;

use crate::domain::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Overdue,
    Today,
    Upcoming,
    Completed,
}

impl SectionKind {
    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::Overdue => "Overdue",
            SectionKind::Today => "Today",
            SectionKind::Upcoming => "Upcoming",
            SectionKind::Completed => "Completed",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SectionKind::Overdue => "⚠️",
            SectionKind::Today => "📌",
            SectionKind::Upcoming => "📅",
            SectionKind::Completed => "✅",
        }
    }

    /// CSS modifier for the count badge
    pub fn count_class(&self) -> &'static str {
        match self {
            SectionKind::Overdue | SectionKind::Today => "today",
            SectionKind::Upcoming => "",
            SectionKind::Completed => "completed",
        }
    }

    pub fn empty_state(&self) -> EmptyState {
        let (icon, title, desc) = match self {
            SectionKind::Overdue => ("⚠️", "No overdue tasks", ""),
            SectionKind::Today => ("☀️", "No tasks for today", "Add a task to start planning your study day"),
            SectionKind::Upcoming => ("📅", "No upcoming tasks", "Plan ahead by adding future study sessions"),
            SectionKind::Completed => ("🎯", "No completed tasks yet", "Check off tasks as you complete them"),
        };
        EmptyState { icon, title, desc }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyState {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub kind: SectionKind,
    pub tasks: Vec<Task>,
}

/// Emoji and message chosen from today's completion percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Banner {
    pub emoji: &'static str,
    pub message: &'static str,
}

impl Banner {
    pub fn for_progress(total: usize, percent: u32) -> Self {
        let (emoji, message) = match percent {
            _ if total == 0 => ("☀️", "No tasks for today"),
            100.. => ("🏆", "All done! Amazing!"),
            75..=99 => ("🔥", "Almost there!"),
            50..=74 => ("💪", "Halfway through!"),
            25..=49 => ("📖", "Good progress!"),
            _ => ("📖", "Let's get started!"),
        };
        Banner { emoji, message }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyProgress {
    pub done: usize,
    pub total: usize,
    pub percent: u32,
    pub banner: Banner,
    /// Minutes of today's tasks already completed
    pub studied_minutes: u32,
    /// Minutes of all tasks due today
    pub planned_minutes: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackerViews {
    pub today: NaiveDate,
    pub progress: DailyProgress,
    /// Open tasks across all dates
    pub pending_total: usize,
    pub overdue: Section,
    pub due_today: Section,
    pub upcoming: Section,
    pub completed: Section,
}

impl TrackerViews {
    pub fn derive(tasks: &[Task], today: NaiveDate) -> Self {
        let open = || tasks.iter().filter(|t| !t.completed);

        let mut overdue: Vec<Task> = open().filter(|t| t.date < today).cloned().collect();
        overdue.sort_by_key(|t| t.date);

        let due_today: Vec<Task> = open().filter(|t| t.date == today).cloned().collect();

        let mut upcoming: Vec<Task> = open().filter(|t| t.date > today).cloned().collect();
        upcoming.sort_by_key(|t| t.date);

        let mut completed: Vec<Task> = tasks.iter().filter(|t| t.completed).cloned().collect();
        completed.sort_by_key(|t| std::cmp::Reverse(t.completed_at.unwrap_or(0)));

        let todays: Vec<&Task> = tasks.iter().filter(|t| t.date == today).collect();
        let total = todays.len();
        let done = todays.iter().filter(|t| t.completed).count();
        let percent = if total > 0 {
            (done as f64 / total as f64 * 100.0).round() as u32
        } else {
            0
        };
        let planned_minutes = todays.iter().map(|t| t.time.minutes()).fold(0u32, u32::saturating_add);
        let studied_minutes = todays
            .iter()
            .filter(|t| t.completed)
            .map(|t| t.time.minutes())
            .fold(0u32, u32::saturating_add);

        Self {
            today,
            progress: DailyProgress {
                done,
                total,
                percent,
                banner: Banner::for_progress(total, percent),
                studied_minutes,
                planned_minutes,
            },
            pending_total: open().count(),
            overdue: Section { kind: SectionKind::Overdue, tasks: overdue },
            due_today: Section { kind: SectionKind::Today, tasks: due_today },
            upcoming: Section { kind: SectionKind::Upcoming, tasks: upcoming },
            completed: Section { kind: SectionKind::Completed, tasks: completed },
        }
    }

    /// Sections in display order; overdue only appears when it has tasks
    pub fn sections(&self) -> Vec<&Section> {
        let mut sections = Vec::with_capacity(4);
        if !self.overdue.tasks.is_empty() {
            sections.push(&self.overdue);
        }
        sections.extend([&self.due_today, &self.upcoming, &self.completed]);
        sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TimeEstimate;
    use chrono::{DateTime, TimeZone, Utc};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, hour, 0, 0).unwrap()
    }

    fn task(id: &str, date: NaiveDate, time: TimeEstimate) -> Task {
        Task::new(id.into(), "Math".into(), format!("Task {id}"), date, time, at(8))
    }

    #[test]
    fn test_partitions_and_orders_sections() {
        let mut done_early = task("c1", day(16), TimeEstimate::Hour1);
        done_early.toggle(at(9));
        let mut done_late = task("c2", day(12), TimeEstimate::Min30);
        done_late.toggle(at(11));

        let tasks = vec![
            task("u2", day(20), TimeEstimate::Min15),
            task("o1", day(14), TimeEstimate::Min15),
            task("t1", day(16), TimeEstimate::Min45),
            task("u1", day(17), TimeEstimate::Min15),
            task("o0", day(10), TimeEstimate::Min15),
            done_early,
            done_late,
        ];

        let views = TrackerViews::derive(&tasks, day(16));
        let ids = |s: &Section| s.tasks.iter().map(|t| t.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&views.overdue), ["o0", "o1"]);
        assert_eq!(ids(&views.due_today), ["t1"]);
        assert_eq!(ids(&views.upcoming), ["u1", "u2"]);
        assert_eq!(ids(&views.completed), ["c2", "c1"]);
        assert_eq!(views.pending_total, 5);
        assert_eq!(views.sections().len(), 4);
    }

    #[test]
    fn test_daily_progress_and_minutes() {
        let mut done = task("a", day(16), TimeEstimate::Hour1Half);
        done.toggle(at(10));
        let tasks = vec![
            done,
            task("b", day(16), TimeEstimate::Min45),
            task("c", day(16), TimeEstimate::Other("later".into())),
            task("d", day(18), TimeEstimate::Hour3),
        ];

        let progress = TrackerViews::derive(&tasks, day(16)).progress;
        assert_eq!(progress.done, 1);
        assert_eq!(progress.total, 3);
        assert_eq!(progress.percent, 33);
        assert_eq!(progress.banner.message, "Good progress!");
        assert_eq!(progress.studied_minutes, 90);
        assert_eq!(progress.planned_minutes, 90 + 45 + 30);
    }

    #[test]
    fn test_banner_thresholds() {
        assert_eq!(Banner::for_progress(0, 0).message, "No tasks for today");
        assert_eq!(Banner::for_progress(4, 0).message, "Let's get started!");
        assert_eq!(Banner::for_progress(5, 20).message, "Let's get started!");
        assert_eq!(Banner::for_progress(4, 25).message, "Good progress!");
        assert_eq!(Banner::for_progress(4, 50).message, "Halfway through!");
        assert_eq!(Banner::for_progress(4, 75).message, "Almost there!");
        assert_eq!(Banner::for_progress(4, 100).emoji, "🏆");
    }

    #[test]
    fn test_overdue_hidden_when_empty() {
        let views = TrackerViews::derive(&[], day(16));
        let kinds: Vec<_> = views.sections().iter().map(|s| s.kind).collect();
        assert_eq!(kinds, [SectionKind::Today, SectionKind::Upcoming, SectionKind::Completed]);
        assert_eq!(views.progress.percent, 0);
    }
}
