use genai_svc::application::ports::{LlmClient, LlmClientError};
use genai_svc::infrastructure::llm::{DEMO_RESPONSE, FakeListLlm};

#[tokio::test]
async fn given_demo_llm_when_called_repeatedly_then_always_returns_same_response() {
    let llm = FakeListLlm::demo();

    for prompt in ["first", "second", "", "Question: x\nAnswer:"] {
        assert_eq!(llm.complete(prompt).await.unwrap(), DEMO_RESPONSE);
    }
}

#[tokio::test]
async fn given_several_responses_when_called_then_cycles_in_order() {
    let llm = FakeListLlm::new(vec!["a".to_string(), "b".to_string(), "c".to_string()]).unwrap();

    let mut outputs = Vec::new();
    for _ in 0..5 {
        outputs.push(llm.complete("ignored").await.unwrap());
    }

    assert_eq!(outputs, ["a", "b", "c", "a", "b"]);
}

#[test]
fn given_empty_response_list_when_creating_then_returns_no_responses() {
    let result = FakeListLlm::new(Vec::new());

    assert!(matches!(result, Err(LlmClientError::NoResponses)));
}

#[test]
fn given_demo_llm_when_inspected_then_holds_single_demo_response() {
    let llm = FakeListLlm::demo();

    assert_eq!(llm.responses(), [DEMO_RESPONSE.to_string()]);
}
