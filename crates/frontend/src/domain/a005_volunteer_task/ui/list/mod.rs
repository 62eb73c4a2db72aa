use crate::shared::components::status_badge::classified_badge;
use crate::shared::icons::icon;
use contracts::domain::a005_volunteer_task::volunteer_tasks;
use leptos::prelude::*;

/// Field assignments of community volunteers
#[component]
pub fn TasksList() -> impl IntoView {
    view! {
        <div class="task-list">
            {volunteer_tasks().iter().map(|task| view! {
                <div class="card task-card">
                    <div class="task-card__head">
                        <div>
                            <div class="task-card__title">{task.description.clone()}</div>
                            <div class="text-muted">{format!("{} • {}", task.id, task.location)}</div>
                        </div>
                        <div class="task-card__badges">
                            {classified_badge(&task.priority, task.priority.code())}
                            {classified_badge(&task.status, task.status.display_name())}
                        </div>
                    </div>
                    <div class="task-card__meta text-muted">
                        <span>{icon("user")}" "{task.assignee.clone()}</span>
                        <span>{icon("clock")}{format!(" Due: {}", task.due_date)}</span>
                    </div>
                    <div class="task-card__equipment">
                        {icon("package")}{format!(" Equipment: {}", task.equipment_label())}
                    </div>
                </div>
            }).collect_view()}
        </div>
    }
}
