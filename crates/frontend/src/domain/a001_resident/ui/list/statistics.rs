use crate::shared::components::CardAnimated;
use contracts::domain::a001_resident::{
    age_distribution, family_members_total, household_distribution, DistributionBucket, Resident,
};
use leptos::prelude::*;

#[component]
pub fn StatisticsTab(residents: Vec<Resident>) -> impl IntoView {
    let ages = age_distribution(&residents);
    let households = household_distribution(&residents);
    let members = family_members_total(&residents);

    view! {
        <div class="two-column">
            <DistributionCard title="Age Distribution" buckets=ages />
            <DistributionCard title="Household Size" buckets=households />
        </div>
        <p class="page__note">
            {format!("{} family members recorded across household heads", members)}
        </p>
    }
}

#[component]
fn DistributionCard(title: &'static str, buckets: Vec<DistributionBucket>) -> impl IntoView {
    view! {
        <CardAnimated class="distribution-card">
            <h3 class="distribution-card__title">{title}</h3>
            <ul class="distribution-card__rows">
                {buckets
                    .into_iter()
                    .map(|bucket| {
                        view! {
                            <li class="distribution-card__row">
                                <span>{bucket.label}</span>
                                <span class="distribution-card__value">
                                    {format!("{}%", bucket.percent)}
                                </span>
                                <div class="progress">
                                    <div
                                        class="progress__bar"
                                        style=format!("width: {}%;", bucket.percent)
                                    ></div>
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </CardAnimated>
    }
}
