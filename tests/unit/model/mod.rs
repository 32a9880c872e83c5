mod test_responses;
