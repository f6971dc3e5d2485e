use yew::prelude::*;

use crate::catalog::{Difficulty, SkillSnap};

#[derive(Properties, PartialEq)]
pub struct SkillSnapCardProps {
    pub title: String,
    pub duration_minutes: u32,
    pub description: String,
    pub difficulty: Difficulty,
    pub category: String,
    #[prop_or_default]
    pub is_completed: bool,
    #[prop_or(true)]
    pub is_offline_available: bool,
}

fn duration_label(minutes: u32) -> String {
    format!("{} min", minutes)
}

fn action_label(is_completed: bool) -> &'static str {
    if is_completed {
        "Review"
    } else {
        "Start"
    }
}

#[function_component(SkillSnapCard)]
pub fn skill_snap_card(props: &SkillSnapCardProps) -> Html {
    html! {
        <div class="snap-card">
            <div class="snap-card-header">
                <div class="snap-card-body">
                    <div class="snap-tags">
                        <span class={props.difficulty.badge_class()}>{props.difficulty.label()}</span>
                        <span class="badge badge-category">{&props.category}</span>
                    </div>
                    <h3>{&props.title}</h3>
                    <p>{&props.description}</p>
                </div>
                if props.is_completed {
                    <span class="snap-done" title="Completed">{"✓"}</span>
                }
            </div>
            <div class="snap-card-footer">
                <div class="snap-meta">
                    <span>{"⏱ "}{duration_label(props.duration_minutes)}</span>
                    if props.is_offline_available {
                        <span>{"⬇ Offline"}</span>
                    }
                </div>
                <button class="snap-action">{"▶ "}{action_label(props.is_completed)}</button>
            </div>
            <style>
                {r#"
                .snap-card {
                    background: #fff;
                    border: 1px solid #f3f4f6;
                    border-radius: 12px;
                    box-shadow: 0 8px 20px rgba(0, 0, 0, 0.08);
                    padding: 1.5rem;
                    transition: box-shadow 0.3s ease;
                }
                .snap-card:hover {
                    box-shadow: 0 12px 28px rgba(0, 0, 0, 0.14);
                }
                .snap-card-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-start;
                    margin-bottom: 1rem;
                }
                .snap-tags {
                    display: flex;
                    gap: 0.5rem;
                    margin-bottom: 0.5rem;
                }
                .snap-card h3 {
                    font-size: 1.1rem;
                    color: #111827;
                    margin: 0 0 0.5rem;
                }
                .snap-card p {
                    color: #4b5563;
                    font-size: 0.9rem;
                    margin: 0;
                }
                .snap-done {
                    color: #22c55e;
                    font-size: 1.4rem;
                }
                .snap-card-footer {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .snap-meta {
                    display: flex;
                    gap: 1rem;
                    color: #6b7280;
                    font-size: 0.85rem;
                }
                .snap-action {
                    background: #2563eb;
                    color: #fff;
                    border: none;
                    border-radius: 8px;
                    padding: 0.5rem 1rem;
                    font-weight: 500;
                    cursor: pointer;
                }
                "#}
            </style>
        </div>
    }
}

pub fn render_snap(snap: &SkillSnap) -> Html {
    html! {
        <SkillSnapCard
            title={snap.title}
            duration_minutes={snap.duration_minutes}
            description={snap.description}
            difficulty={snap.difficulty}
            category={snap.category}
            is_completed={snap.is_completed}
            is_offline_available={snap.is_offline_available}
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_reads_in_minutes() {
        assert_eq!(duration_label(12), "12 min");
    }

    #[test]
    fn finished_lessons_offer_review() {
        assert_eq!(action_label(true), "Review");
        assert_eq!(action_label(false), "Start");
    }
}
