//! Conversions between storage entities and wire models
//!
//! Each entity pair has a pure, hand-written mapping function in place
//! of a declarative mapper. The camp mapping flattens
//! `Location.venue_name` into the `Venue` wire field and restores it on
//! the way back; everything else is field-to-field.

use crate::models::{Camp, CampModel, Location, NewCamp, Speaker, SpeakerModel, Talk, TalkModel};

/// Camp entity to wire model, including nested talks when loaded
pub fn camp_to_model(camp: &Camp) -> CampModel {
    CampModel {
        moniker: camp.moniker.clone(),
        name: camp.name.clone(),
        description: camp.description.clone(),
        venue: camp.location.venue_name.clone(),
        event_date_start: camp.event_date_start,
        event_date_end: camp.event_date_end,
        talks: camp
            .talks
            .as_ref()
            .map(|talks| talks.iter().map(talk_to_model).collect()),
    }
}

/// Wire model to a camp awaiting persistence
///
/// The `Venue` wire field lands in `Location.venue_name`; the remaining
/// address fields have no wire representation and start empty.
pub fn camp_from_model(model: &CampModel) -> NewCamp {
    NewCamp {
        moniker: model.moniker.clone(),
        name: model.name.clone(),
        description: model.description.clone(),
        event_date_start: model.event_date_start,
        event_date_end: model.event_date_end,
        location: Location {
            venue_name: model.venue.clone(),
            ..Location::default()
        },
    }
}

/// Overlay the supplied wire fields onto an existing camp
///
/// Used by PUT: the name always overlays, optional fields overlay only
/// when supplied. The moniker is immutable and never overlaid.
pub fn apply_camp_model(camp: &mut Camp, model: &CampModel) {
    camp.name = model.name.clone();
    if model.description.is_some() {
        camp.description = model.description.clone();
    }
    if model.venue.is_some() {
        camp.location.venue_name = model.venue.clone();
    }
    if model.event_date_start.is_some() {
        camp.event_date_start = model.event_date_start;
    }
    if model.event_date_end.is_some() {
        camp.event_date_end = model.event_date_end;
    }
}

/// Talk entity to wire model, speaker detail included
pub fn talk_to_model(talk: &Talk) -> TalkModel {
    TalkModel {
        id: Some(talk.id),
        title: talk.title.clone(),
        abstract_text: talk.abstract_text.clone(),
        level: talk.level,
        speaker: Some(speaker_to_model(&talk.speaker)),
    }
}

/// Overlay the supplied wire fields onto an existing talk
///
/// The speaker association is handled separately by the update command,
/// which re-resolves a supplied reference before swapping it.
pub fn apply_talk_model(talk: &mut Talk, model: &TalkModel) {
    talk.title = model.title.clone();
    if model.abstract_text.is_some() {
        talk.abstract_text = model.abstract_text.clone();
    }
    if model.level.is_some() {
        talk.level = model.level;
    }
}

/// Speaker entity to wire model
pub fn speaker_to_model(speaker: &Speaker) -> SpeakerModel {
    SpeakerModel {
        speaker_id: speaker.id,
        name: Some(speaker.full_name()),
        company: speaker.company.clone(),
        bio: speaker.bio.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_camp() -> Camp {
        Camp {
            id: 1,
            moniker: "ATL2024".to_string(),
            name: "Atlanta Code Camp".to_string(),
            description: Some("Community conference".to_string()),
            event_date_start: NaiveDate::from_ymd_opt(2024, 3, 1),
            event_date_end: NaiveDate::from_ymd_opt(2024, 3, 2),
            location: Location {
                venue_name: Some("Convention Center".to_string()),
                city_town: Some("Atlanta".to_string()),
                ..Location::default()
            },
            talks: None,
        }
    }

    fn sample_speaker() -> Speaker {
        Speaker {
            id: 7,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            company: Some("Analytical Engines".to_string()),
            bio: None,
        }
    }

    #[test]
    fn test_camp_to_model_flattens_venue() {
        let model = camp_to_model(&sample_camp());
        assert_eq!(model.moniker, "ATL2024");
        assert_eq!(model.venue.as_deref(), Some("Convention Center"));
        assert!(model.talks.is_none());
    }

    #[test]
    fn test_camp_from_model_restores_venue() {
        let model = camp_to_model(&sample_camp());
        let new_camp = camp_from_model(&model);
        assert_eq!(new_camp.location.venue_name.as_deref(), Some("Convention Center"));
        assert_eq!(new_camp.moniker, "ATL2024");
        // Address fields have no wire representation
        assert!(new_camp.location.city_town.is_none());
    }

    #[test]
    fn test_camp_round_trip_preserves_wire_fields() {
        let original = camp_to_model(&sample_camp());
        let round_tripped = camp_to_model(&camp_from_model(&original).into_camp(99));
        assert_eq!(original, round_tripped);
    }

    #[test]
    fn test_apply_camp_model_overlays_supplied_fields() {
        let mut camp = sample_camp();
        let model = CampModel {
            moniker: "IGNORED".to_string(),
            name: "Atlanta Code Camp 2024".to_string(),
            description: None,
            venue: Some("New Venue".to_string()),
            event_date_start: None,
            event_date_end: None,
            talks: None,
        };

        apply_camp_model(&mut camp, &model);

        assert_eq!(camp.moniker, "ATL2024");
        assert_eq!(camp.name, "Atlanta Code Camp 2024");
        assert_eq!(camp.location.venue_name.as_deref(), Some("New Venue"));
        // Fields absent from the model keep their values
        assert_eq!(camp.description.as_deref(), Some("Community conference"));
        assert_eq!(camp.event_date_start, NaiveDate::from_ymd_opt(2024, 3, 1));
    }

    #[test]
    fn test_talk_to_model_includes_speaker() {
        let talk = Talk {
            id: 3,
            camp_id: 1,
            title: "Intro to APIs".to_string(),
            abstract_text: Some("All about APIs".to_string()),
            level: Some(100),
            speaker: sample_speaker(),
        };

        let model = talk_to_model(&talk);
        assert_eq!(model.id, Some(3));
        let speaker = model.speaker.unwrap();
        assert_eq!(speaker.speaker_id, 7);
        assert_eq!(speaker.name.as_deref(), Some("Ada Lovelace"));
    }

    #[test]
    fn test_apply_talk_model_leaves_speaker_alone() {
        let mut talk = Talk {
            id: 3,
            camp_id: 1,
            title: "Intro to APIs".to_string(),
            abstract_text: None,
            level: Some(100),
            speaker: sample_speaker(),
        };
        let model = TalkModel {
            id: None,
            title: "Deep dive into APIs".to_string(),
            abstract_text: Some("Now with depth".to_string()),
            level: None,
            speaker: None,
        };

        apply_talk_model(&mut talk, &model);

        assert_eq!(talk.title, "Deep dive into APIs");
        assert_eq!(talk.abstract_text.as_deref(), Some("Now with depth"));
        assert_eq!(talk.level, Some(100));
        assert_eq!(talk.speaker.id, 7);
    }
}
