/// Adjustment from supplementary-task completion: -1 below three completed
/// tasks, otherwise 0. Tasks can never raise a grade or trigger the cap.
pub fn task_adjustment(tasks_completed: u32) -> i64 {
    if tasks_completed < 3 { -1 } else { 0 }
}
