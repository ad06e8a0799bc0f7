//! Prompt templates for the travel endpoints.
//!
//! These render the validated request into the free-text prompt handed to
//! the completion dispatcher. Optional fields only appear when provided.

use crate::models::{RecommendationRequest, TravelPlanRequest};

pub fn travel_plan_prompt(request: &TravelPlanRequest) -> String {
    let mut prompt = format!(
        "Create a detailed travel plan for a trip to {} for {} days.\n",
        request.destination.trim(),
        request.duration
    );

    if let Some(budget) = &request.budget {
        prompt.push_str(&format!("Budget: {budget}\n"));
    }
    if let Some(interests) = request.interests.as_deref().filter(|i| !i.is_empty()) {
        prompt.push_str(&format!("Interests: {}\n", interests.join(", ")));
    }
    if let Some(style) = &request.travel_style {
        prompt.push_str(&format!("Travel style: {style}\n"));
    }

    prompt.push_str(
        "\nInclude:\n\
         1. Day-by-day itinerary with activities\n\
         2. Recommended accommodations\n\
         3. Transportation tips\n\
         4. Must-see attractions\n\
         5. Local food recommendations\n\
         6. Estimated costs\n\
         7. Packing suggestions\n\
         8. Safety tips\n\
         \n\
         Format the response neatly with clear sections and subsections.",
    );
    prompt
}

pub fn recommendations_prompt(request: &RecommendationRequest) -> String {
    let mut prompt = format!(
        "Recommend 5 travel destinations based on the following information:\n\
         Current location: {}\n\
         Interests: {}\n",
        request.current_location.trim(),
        request.interests.join(", ")
    );

    if let Some(history) = request.travel_history.as_deref().filter(|h| !h.is_empty()) {
        prompt.push_str(&format!("Travel history: {}\n", history.join(", ")));
    }
    if let Some(budget) = &request.budget {
        prompt.push_str(&format!("Budget: {budget}\n"));
    }
    if let Some(season) = &request.season {
        prompt.push_str(&format!("Season: {season}\n"));
    }

    prompt.push_str(
        "\nFor each destination, provide:\n\
         1. Why it matches the user's interests\n\
         2. Best time to visit\n\
         3. Estimated budget needed\n\
         4. Top 3 attractions\n\
         5. A unique experience only possible there\n\
         \n\
         Format as a structured list with clear sections for each destination.",
    );
    prompt
}
