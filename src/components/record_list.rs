//! Record List Component

use leptos::prelude::*;

use crate::models::Record;

#[component]
pub fn RecordList(records: Signal<Vec<Record>>) -> impl IntoView {
    view! {
        <ul class="record-list">
            <For
                each=move || records.get()
                key=|record| record.id.clone()
                children=move |record| {
                    view! {
                        <li class="record">
                            <h3>{record.title.unwrap_or_default()}</h3>
                            <p>{record.body.unwrap_or_default()}</p>
                            {record.user_id.map(|user_id| view! {
                                <span class="record-owner">{format!("user #{}", user_id)}</span>
                            })}
                        </li>
                    }
                }
            />
        </ul>
        <p class="record-count">{move || format!("{} records", records.with(Vec::len))}</p>
    }
}
