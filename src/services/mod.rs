pub mod attribute_extractor;
pub mod gemini_service;
pub mod itinerary_provider;
pub mod knowledge_base;
pub mod mock_itinerary_service;
pub mod session_store;
