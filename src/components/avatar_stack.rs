//! Participant Avatar Components

use leptos::prelude::*;

use crate::avatar::{avatar_url, preview};
use crate::constants::AVATAR_PREVIEW;
use crate::models::Participant;

/// Overlapping avatars for the first few participants, then "+N"
#[component]
pub fn AvatarStack(participants: Vec<Participant>, size: u32) -> impl IntoView {
    let (shown, hidden) = preview(&participants, AVATAR_PREVIEW);

    let avatars = shown
        .iter()
        .enumerate()
        .map(|(i, p)| {
            view! {
                <img
                    class="avatar"
                    src=avatar_url(p)
                    alt=p.nickname.clone()
                    title=p.nickname.clone()
                    width=size
                    height=size
                    style=format!("z-index: {}", 10 - i)
                />
            }
        })
        .collect_view();

    view! {
        <div class="avatar-stack">
            {avatars}
            {(hidden > 0).then(|| view! {
                <span class="avatar-overflow" style=format!("width: {size}px; height: {size}px")>
                    {format!("+{hidden}")}
                </span>
            })}
        </div>
    }
}

/// Full participant list shown on the edit page
#[component]
pub fn ParticipantList(participants: Vec<Participant>) -> impl IntoView {
    if participants.is_empty() {
        return ().into_any();
    }

    view! {
        <div class="participant-list">
            <h3>{format!("참여자 ({}명)", participants.len())}</h3>
            <ul>
                {participants
                    .iter()
                    .map(|p| view! {
                        <li class="participant">
                            <img class="avatar" src=avatar_url(p) alt=p.nickname.clone() width="24" height="24" />
                            <span>{p.nickname.clone()}</span>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
    .into_any()
}
