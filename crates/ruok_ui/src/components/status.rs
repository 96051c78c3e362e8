use leptos::*;
use ruok_core::status::{StatusClass, StatusColor, StatusIcon};

fn icon_class(icon: StatusIcon) -> &'static str {
    match icon {
        StatusIcon::Check => "iconoir-check-circle",
        StatusIcon::Block => "iconoir-minus-circle",
        StatusIcon::Question => "iconoir-help-circle",
    }
}

fn color_class(color: StatusColor) -> &'static str {
    match color {
        StatusColor::Success => "bg-emerald-600 text-emerald-50",
        StatusColor::Danger => "bg-red-600 text-red-50",
        StatusColor::Warning => "bg-yellow-600 text-yellow-50",
    }
}

/// Pill showing the icon and label of a classified status. The raw token is
/// kept in the tooltip.
#[component]
pub fn StatusChip(status: StatusClass) -> impl IntoView {
    let class = format!(
        "flex items-center whitespace-nowrap rounded-full px-3 py-1 w-fit {}",
        color_class(status.color)
    );
    let icon = format!("{} mr-2", icon_class(status.icon));
    let label = status.label();

    view! {
        <div class=class title=status.token>
            <i class=icon></i>
            {label}
        </div>
    }
}
